//! CSV report writers with fixed column schemas.
//!
//! One report file per run, named with a timestamp prefix. Each writer
//! keeps its own set of written identity keys, so even if an undeduplicated
//! collection is passed in, the file still holds at most one row per
//! identity. `time_accessed` is stamped once per run, not per row.

use std::fs::File;
use std::io;
use std::path::Path;

use chrono::{DateTime, Datelike, Local, Timelike};
use serde::Serialize;
use std::collections::HashSet;

use crate::post::{Posting, Site};
use crate::Error;

/// Report filename for a run: `YYYY_M_D_H_MM_potential_eeoc_violations_from_<site>.csv`.
///
/// Fields are not zero-padded, matching the established archive naming.
pub fn outfile_name(site: Site, started: DateTime<Local>) -> String {
    format!(
        "{}_{}_{}_{}_{}_potential_eeoc_violations_from_{}.csv",
        started.year(),
        started.month(),
        started.day(),
        started.hour(),
        started.minute(),
        site.slug()
    )
}

/// `time_accessed` column value for a run.
pub fn run_timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Debug, Serialize)]
struct CraigslistRow<'a> {
    url: &'a str,
    job_name: &'a str,
    job_body: &'a str,
    post_time: &'a str,
    flagged_terms: String,
    time_accessed: &'a str,
}

#[derive(Debug, Serialize)]
struct ZipRecruiterRow<'a> {
    job_id: String,
    job_title: &'a str,
    job_organization_name: &'a str,
    job_snippet_text: &'a str,
    source_url: &'a str,
    job_search_term: &'a str,
    location_search_term: &'a str,
    full_url: &'a str,
}

/// Write Craigslist postings as CSV. Returns the number of data rows
/// written, after skipping repeated identities.
pub fn write_craigslist<W: io::Write>(
    writer: W, postings: &[Posting], time_accessed: &str,
) -> Result<usize, Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut written_ids = HashSet::new();
    let mut rows = 0;

    for post in postings {
        if !written_ids.insert(post.identity()) {
            tracing::info!(url = %post.url, "skipping posting, already written");
            continue;
        }
        let row = CraigslistRow {
            url: &post.url,
            job_name: &post.title,
            job_body: &post.body,
            post_time: post.posted_at.as_deref().unwrap_or(""),
            flagged_terms: post
                .matches
                .iter()
                .map(|m| m.term.as_str())
                .collect::<Vec<_>>()
                .join(","),
            time_accessed,
        };
        csv_writer.serialize(row)?;
        rows += 1;
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// Write ZipRecruiter postings as CSV. Returns the number of data rows
/// written, after skipping repeated identities.
pub fn write_ziprecruiter<W: io::Write>(writer: W, postings: &[Posting]) -> Result<usize, Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut written_ids = HashSet::new();
    let mut rows = 0;

    for post in postings {
        let job_id = post.identity();
        if !written_ids.insert(job_id.clone()) {
            tracing::info!(url = %post.url, "skipping posting, already written");
            continue;
        }
        let row = ZipRecruiterRow {
            job_id,
            job_title: &post.title,
            job_organization_name: &post.organization,
            job_snippet_text: &post.body,
            source_url: &post.source_url,
            job_search_term: &post.search_term,
            location_search_term: &post.location_term,
            full_url: &post.url,
        };
        csv_writer.serialize(row)?;
        rows += 1;
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// Write a report file for `site` at `path`. Returns the number of data
/// rows written.
pub fn write_report_file(
    path: &Path, site: Site, postings: &[Posting], started: DateTime<Local>,
) -> Result<usize, Error> {
    let file = File::create(path)?;
    let rows = match site {
        Site::Craigslist => write_craigslist(file, postings, &run_timestamp(started))?,
        Site::ZipRecruiter => write_ziprecruiter(file, postings)?,
    };
    tracing::info!(rows, path = %path.display(), "wrote report");
    Ok(rows)
}
