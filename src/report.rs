// Decorator Pattern: reports
// Filters, sorting and export formats wrap a base report and extend its text.

use crate::error::ParseKindError;
use chrono::{Days, NaiveDate};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Short date as printed in report headers, e.g. `10/12/2026`.
const SHORT_DATE: &str = "%-m/%-d/%Y";

pub trait Report {
    fn generate(&self) -> String;
}

impl<R: Report + ?Sized> Report for Box<R> {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalesReport;

impl Report for SalesReport {
    fn generate(&self) -> String {
        "Sales Report Data".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserReport;

impl Report for UserReport {
    fn generate(&self) -> String {
        "User Report Data".to_string()
    }
}

// ============================================================================
// Decorators
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DateFilterDecorator<R> {
    report: R,
    start: NaiveDate,
    end: NaiveDate,
}

impl<R: Report> DateFilterDecorator<R> {
    pub fn new(report: R, start: NaiveDate, end: NaiveDate) -> Self {
        Self { report, start, end }
    }

    /// Window from `days` days before `today` through `today`.
    pub fn last_days(report: R, today: NaiveDate, days: u64) -> Self {
        let start = today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        Self::new(report, start, today)
    }
}

impl<R: Report> Report for DateFilterDecorator<R> {
    fn generate(&self) -> String {
        format!(
            "{} with date filter from {} to {}",
            self.report.generate(),
            self.start.format(SHORT_DATE),
            self.end.format(SHORT_DATE)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortingDecorator<R> {
    report: R,
    criteria: String,
}

impl<R: Report> SortingDecorator<R> {
    pub fn new(report: R, criteria: impl Into<String>) -> Self {
        Self {
            report,
            criteria: criteria.into(),
        }
    }
}

impl<R: Report> Report for SortingDecorator<R> {
    fn generate(&self) -> String {
        format!("{} sorted by {}", self.report.generate(), self.criteria)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvExportDecorator<R> {
    report: R,
}

impl<R: Report> CsvExportDecorator<R> {
    pub fn new(report: R) -> Self {
        Self { report }
    }
}

impl<R: Report> Report for CsvExportDecorator<R> {
    fn generate(&self) -> String {
        format!("{} in CSV format", self.report.generate())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfExportDecorator<R> {
    report: R,
}

impl<R: Report> PdfExportDecorator<R> {
    pub fn new(report: R) -> Self {
        Self { report }
    }
}

impl<R: Report> Report for PdfExportDecorator<R> {
    fn generate(&self) -> String {
        format!("{} in PDF format", self.report.generate())
    }
}

// ============================================================================
// Runtime composition
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ReportKind {
    Sales,
    User,
}

impl ReportKind {
    pub fn build(self) -> Box<dyn Report> {
        match self {
            ReportKind::Sales => Box::new(SalesReport),
            ReportKind::User => Box::new(UserReport),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportKind::Sales => f.write_str("Sales"),
            ReportKind::User => f.write_str("User"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sales" => Ok(ReportKind::Sales),
            "User" => Ok(ReportKind::User),
            _ => Err(ParseKindError::new("report", s, "Sales, User")),
        }
    }
}

/// Either explicit bounds or a window ending on the run date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateWindow {
    Between { from: NaiveDate, to: NaiveDate },
    LastDays { last_days: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStep {
    DateFilter(DateWindow),
    Sort(String),
    Csv,
    Pdf,
}

impl ReportStep {
    pub fn wrap(&self, report: Box<dyn Report>, today: NaiveDate) -> Box<dyn Report> {
        match self {
            ReportStep::DateFilter(DateWindow::Between { from, to }) => {
                Box::new(DateFilterDecorator::new(report, *from, *to))
            }
            ReportStep::DateFilter(DateWindow::LastDays { last_days }) => {
                Box::new(DateFilterDecorator::last_days(report, today, *last_days))
            }
            ReportStep::Sort(criteria) => Box::new(SortingDecorator::new(report, criteria.as_str())),
            ReportStep::Csv => Box::new(CsvExportDecorator::new(report)),
            ReportStep::Pdf => Box::new(PdfExportDecorator::new(report)),
        }
    }
}

/// Builds `kind` and applies `steps` first to last.
pub fn compose(kind: ReportKind, steps: &[ReportStep], today: NaiveDate) -> Box<dyn Report> {
    steps
        .iter()
        .fold(kind.build(), |report, step| step.wrap(report, today))
}
