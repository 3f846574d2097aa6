use crate::util::AsciiTable;
use anyhow::Context;
use tracing::info;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "search", description = "search for players by nickname")]
pub struct Options {
    #[argh(positional, description = "the nickname to search for")]
    pub nickname: String,

    #[argh(switch, description = "print the results as json")]
    pub json: bool,
}

pub async fn exec(client: &overwatch::Client, options: Options) -> anyhow::Result<()> {
    info!(nickname = %options.nickname, "searching for players");
    let results = client
        .search(&options.nickname)
        .await
        .with_context(|| format!("failed to search for `{}`", options.nickname))?;
    info!("found {} players", results.len());

    if options.json {
        let json =
            serde_json::to_string_pretty(&results).context("failed to serialize results")?;
        println!("{json}");
        return Ok(());
    }

    if results.is_empty() {
        println!("No Results");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = std::iter::once(
        ["name", "platform", "region", "tier", "level", "career"]
            .map(String::from)
            .to_vec(),
    )
    .chain(results.iter().map(|result| {
        let name = result
            .unknown
            .get("battleTag")
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string();
        vec![
            name,
            result.platform.clone(),
            result.region.clone(),
            result.tier.map_or_else(|| "?".to_string(), |tier| tier.to_string()),
            result.level.map_or_else(|| "?".to_string(), |level| level.to_string()),
            result.career_link.clone(),
        ]
    }))
    .collect();
    print!("{}", AsciiTable::from_rows(&rows));

    Ok(())
}
