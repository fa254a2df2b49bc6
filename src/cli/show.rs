use anyhow::Result;
use ipm_cadence::{Panel, config::Config};
use ipm_cadence_resolver::{Clock, Resolution};
use time::{Date, OffsetDateTime};

/// Current instant, or midnight of `date` in the configured offset.
fn instant(config: &Config, date: Option<Date>) -> Result<OffsetDateTime> {
    let now = config.clock()?.now();

    Ok(match date {
        Some(date) => date.midnight().assume_offset(now.offset()),
        None => now,
    })
}

fn resolve(config: &Config, date: Option<Date>) -> Result<(Resolution, usize)> {
    let resolver = config.resolver()?;
    let now = instant(config, date)?;

    Ok((resolver.resolve_at(now), resolver.table().cadence_interval()))
}

pub fn show(config: &Config, date: Option<Date>) -> Result<()> {
    let (resolution, cadence_interval) = resolve(config, date)?;
    let panel = Panel::from_resolution(&resolution, &config.display.placeholder);

    println!("{}", panel.to_plain_text());

    if let Some(position) = resolution.position {
        println!(
            "{} of week {}, cadence week {} of {}",
            position.day_of_week,
            position.week_of_year,
            position.cadence_index + 1,
            cadence_interval
        );
    }

    Ok(())
}

pub fn render(config: &Config, date: Option<Date>) -> Result<()> {
    let (resolution, _) = resolve(config, date)?;
    let panel = Panel::from_resolution(&resolution, &config.display.placeholder);

    println!("{}", panel.to_html()?);

    Ok(())
}

pub fn table(config: &Config) -> Result<()> {
    let resolver = config.resolver()?;

    if resolver.schedule().is_empty() {
        tracing::warn!("schedule is empty");
    }

    println!("{}", resolver.table());

    Ok(())
}
