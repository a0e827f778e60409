use crate::component::VideoDataReport;
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;

pub fn run_video_data_report(term: &Term, config: &mut Config) -> Result<()> {
    let mut report = VideoDataReport::new(config);

    if let Err(e) = report.run() {
        eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
