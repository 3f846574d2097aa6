use crate::{
    config::Config,
    util::{
        format_stat,
        AsciiTable,
    },
};
use anyhow::{
    bail,
    Context,
};
use overwatch::{
    ErrorKind,
    GameMode,
    Platform,
    ProfileReport,
    StatValue,
};
use tracing::{
    info,
    warn,
};

/// The stat shown next to each hero in text output
const HERO_SUMMARY_STAT: &str = "time_played";

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "profile",
    description = "get the career profile of a player"
)]
pub struct Options {
    #[argh(positional, description = "the platform, one of xbl, psn or pc")]
    pub platform: Platform,

    #[argh(positional, description = "the battle tag or gamertag of the player")]
    pub tag: String,

    #[argh(option, description = "the region of a pc player, like us, eu or kr")]
    pub region: Option<String>,

    #[argh(switch, description = "only get overall stats, skipping per-hero stats")]
    pub overall: bool,

    #[argh(switch, description = "print the report as json")]
    pub json: bool,
}

pub async fn exec(
    client: &overwatch::Client,
    config: &Config,
    options: Options,
) -> anyhow::Result<()> {
    let region = options.region.as_deref().or_else(|| config.default_region());

    info!(
        platform = %options.platform,
        region = ?region,
        tag = %options.tag,
        overall = options.overall,
        "getting career profile"
    );
    let report = match client
        .get_all(options.platform, region, &options.tag, options.overall)
        .await
    {
        Ok(report) => report,
        Err(error) if error.kind() == ErrorKind::ProfileNotFound => {
            bail!("no career profile found for `{}`", options.tag);
        }
        Err(error) => {
            return Err(error).with_context(|| {
                format!("failed to get the career profile for `{}`", options.tag)
            });
        }
    };

    let profile = &report.profile;
    if profile.is_ranked() && profile.ranking.is_empty() {
        warn!(
            season = ?profile.season,
            "no ranking label known for this season, the rank tables may be out of date"
        );
    }

    if options.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ProfileReport) {
    let profile = &report.profile;

    println!("{} ({})", profile.nick, profile.platform);
    println!(" * Url: {}", profile.url);
    if let Some(level) = profile.level {
        println!(" * Level: {level}");
    }
    if !profile.tier.is_empty() {
        println!(" * Tier: {}", profile.tier);
    }
    match profile.rank {
        Some(rank) if profile.ranking.is_empty() => println!(" * Rank: {rank}"),
        Some(rank) => println!(" * Rank: {rank} ({})", profile.ranking),
        None => println!(" * Rank: unranked"),
    }
    println!();

    for mode in GameMode::ALL {
        let stats = report.game_mode(mode);
        if stats.global.is_empty() && stats.heroes.is_empty() {
            continue;
        }

        println!("{}", mode.as_str().to_uppercase());
        if let Some(hero) = stats.mastering_hero.as_deref() {
            println!(" * Mastering: {hero}");
        }

        let global_rows: Vec<Vec<String>> = std::iter::once(vec![
            "stat".to_string(),
            "value".to_string(),
        ])
        .chain(
            stats
                .global
                .iter()
                .map(|(key, value)| vec![key.clone(), format_stat(*value)]),
        )
        .collect();
        print!("{}", AsciiTable::from_rows(&global_rows));

        if !stats.heroes.is_empty() {
            let hero_rows: Vec<Vec<String>> = std::iter::once(vec![
                "hero".to_string(),
                HERO_SUMMARY_STAT.to_string(),
                "stats".to_string(),
            ])
            .chain(stats.heroes.iter().map(|(hero, hero_stats)| {
                let summary = hero_stats
                    .get(HERO_SUMMARY_STAT)
                    .copied()
                    .unwrap_or(StatValue::Invalid);
                vec![
                    hero.clone(),
                    format_stat(summary),
                    hero_stats.len().to_string(),
                ]
            }))
            .collect();
            print!("{}", AsciiTable::from_rows(&hero_rows));
        }
        println!();
    }

    let acquired = report
        .achievements
        .iter()
        .filter(|achievement| achievement.acquired)
        .count();
    println!(
        "ACHIEVEMENTS: {acquired}/{} unlocked",
        report.achievements.len()
    );
}
