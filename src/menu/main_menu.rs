use crate::config::Language;
use crate::config::save::{parse_exclude_dirs, save_settings};
use crate::config::types::Config;
use crate::menu::handlers::run_video_data_report;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rust_i18n::t;

pub fn show_main_menu(term: &Term, config: &mut Config) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_scan"),
        t!("main_menu.opt_exclude"),
        t!("main_menu.opt_language"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_video_data_report(term, config)?;
            Ok(true)
        }
        Some(1) => {
            show_exclude_menu(term, config)?;
            Ok(true)
        }
        Some(2) => {
            show_language_menu(term, config)?;
            Ok(true)
        }
        Some(3) | None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 排除規則設定
fn show_exclude_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.exclude.title")).cyan().bold());

    let current = config.settings.exclude_dirs.join(", ");
    let display = if current.is_empty() {
        t!("settings.exclude.none").to_string()
    } else {
        current.clone()
    };
    println!(
        "\n{} {}",
        style(t!("settings.exclude.current")).dim(),
        display
    );
    println!();

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.exclude.prompt"))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text_on(term)?;

    let exclude_dirs = parse_exclude_dirs(&input);
    if exclude_dirs != config.settings.exclude_dirs {
        config.settings.exclude_dirs = exclude_dirs;
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            config.settings.exclude_dirs.join(", ")
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 語言設定選單
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.language.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let languages = Language::all();
    let items: Vec<String> = languages.iter().map(ToString::to_string).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language.prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_lang = languages[selection];

    if selected_lang != config.settings.language {
        config.settings.language = selected_lang;
        rust_i18n::set_locale(selected_lang.as_str());
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            selected_lang
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
