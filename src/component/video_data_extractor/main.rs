use super::extractor::{ScanOutcome, VideoDataExtractor};
use super::table::create_table;
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rust_i18n::t;
use std::path::Path;
use std::time::Duration;

/// 摘要最多列出的資料夾數量
const MAX_DISPLAYED_RECORDS: usize = 20;

/// 影片資料夾報表元件
pub struct VideoDataReport<'a> {
    config: &'a mut Config,
}

impl<'a> VideoDataReport<'a> {
    pub const fn new(config: &'a mut Config) -> Self {
        Self { config }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style(t!("report.title")).cyan().bold());

        let Some(root_dir) = self.prompt_root_dir()? else {
            return Ok(()); // ESC pressed
        };
        let base_folder_name = Self::prompt_base_folder_name()?;

        add_recent_path(&mut self.config.settings, &root_dir);
        if let Err(e) = save_settings(&self.config.settings) {
            warn!("無法儲存路徑歷史: {e:#}");
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} {wide_msg}")
                .expect("Invalid progress bar template"),
        );
        spinner.set_message(t!("report.scanning").to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        let extractor = VideoDataExtractor::new(self.config.settings.exclude_dirs.clone())
            .with_progress(spinner.clone());
        let outcome = extractor.info_extractor(Path::new(&root_dir), &base_folder_name);
        spinner.finish_and_clear();

        if outcome.base_missing {
            println!(
                "{}",
                style(t!(
                    "report.base_missing",
                    path = outcome.base_path.display().to_string()
                ))
                .yellow()
            );
            return Ok(());
        }

        self.print_summary(&outcome);

        let table = create_table(&outcome.records);
        println!();
        println!(
            "{}",
            style(t!(
                "report.table_ready",
                rows = table.len(),
                columns = table.columns().len()
            ))
            .dim()
        );

        info!(
            "掃描任務完成 - 基底: {}, 紀錄: {}, 失敗: {}",
            outcome.base_path.display(),
            outcome.records.len(),
            outcome.failures.len()
        );

        Ok(())
    }

    fn prompt_root_dir(&self) -> Result<Option<String>> {
        let recent_paths = &self.config.settings.recent_paths;

        if recent_paths.is_empty() {
            return Ok(Some(Self::input_root_dir()?));
        }

        let mut options: Vec<String> = recent_paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let indicator = if Path::new(p).exists() { "✓" } else { "✗" };
                format!("{} [{}] {}", i + 1, indicator, p)
            })
            .collect();
        options.push(t!("report.opt_new_path").to_string());

        println!("{}", style(t!("common.esc_hint")).dim());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("report.prompt_select_path"))
            .items(&options)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(None),
            Some(idx) if idx < recent_paths.len() => Ok(Some(recent_paths[idx].clone())),
            Some(_) => Ok(Some(Self::input_root_dir()?)),
        }
    }

    fn input_root_dir() -> Result<String> {
        let path: String = Input::new()
            .with_prompt(t!("report.prompt_root_dir"))
            .interact_text()?;
        Ok(path.trim().to_string())
    }

    fn prompt_base_folder_name() -> Result<String> {
        let name: String = Input::new()
            .with_prompt(t!("report.prompt_base_folder"))
            .interact_text()?;
        Ok(name.trim().to_string())
    }

    fn print_summary(&self, outcome: &ScanOutcome) {
        println!();

        if outcome.records.is_empty() {
            println!("{}", style(t!("report.no_records")).yellow());
        } else {
            println!(
                "{}",
                style(t!("report.found", count = outcome.records.len())).green()
            );
            println!();

            for record in outcome.records.iter().take(MAX_DISPLAYED_RECORDS) {
                let year = if record.year.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", record.year)
                };
                println!(
                    "  {} {}{} {}",
                    style("→").dim(),
                    style(&record.name).cyan(),
                    year,
                    style(&record.resolution).magenta()
                );
                println!(
                    "      {}",
                    style(t!(
                        "report.record_detail",
                        videos = record.video_files_count,
                        subtitles = record.srt_files_count,
                        size = record.video_files_size.as_str()
                    ))
                    .dim()
                );
            }

            if outcome.records.len() > MAX_DISPLAYED_RECORDS {
                println!(
                    "  {}",
                    style(t!(
                        "report.more",
                        count = outcome.records.len() - MAX_DISPLAYED_RECORDS
                    ))
                    .dim()
                );
            }
        }

        if !outcome.failures.is_empty() {
            println!();
            println!(
                "{}",
                style(t!("report.failures", count = outcome.failures.len())).red()
            );
            for failure in &outcome.failures {
                println!(
                    "  {} {}: {:#}",
                    style("•").dim(),
                    failure.path.display(),
                    failure.error
                );
            }
        }
    }
}
