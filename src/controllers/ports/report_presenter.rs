use std::io::Write;

use crate::controllers::cli::trace::TraceReport;

pub trait ReportPresenterPort {
    fn present(&self, reports: &[TraceReport], out: impl Write) -> std::io::Result<()>;
}
