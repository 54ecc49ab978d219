use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use halow_chanmap::host::{CountrySource, FixedCountry, SysfsCountry};
use halow_chanmap::{
    active_table, all_tables, init_logger, rate_scale_factor, read_country_code, scale_rate,
    select_table, CountryTable, HostConfig, MmrcReader, MorseCli, StatSlot,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "halow-chanmap")]
#[command(about = "5 GHz to 802.11ah channel, frequency and rate translation")]
struct Cli {
    /// JSON host configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List countries with a channel map
    Countries,
    /// Dump the channel map of a country
    Table { country: String },
    /// S1G channel for a 5 GHz channel
    Lookup { country: String, legacy_channel: u32 },
    /// Center frequency of an S1G channel
    Freq { country: String, halow_channel: u32 },
    /// S1G channel for a center frequency in kHz
    Channel { country: String, freq_khz: u32 },
    /// Bandwidth of an S1G channel
    Bandwidth { country: String, halow_channel: u32 },
    /// Rescale a 5 GHz data rate to S1G
    Rate { rate: u32, bandwidth_mhz: u32 },
    /// Show the country configured on the host and its channel map
    Country {
        /// Use this country instead of reading the driver parameter
        #[arg(long)]
        set: Option<String>,
    },
    /// Average MMRC throughput of a phy, in kbps
    Throughput { phy: String },
    /// Integer statistics from morse_cli
    Stats {
        ifname: String,
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

fn emit(json: bool, value: serde_json::Value, text: String) {
    if json {
        println!("{value}");
    } else {
        println!("{text}");
    }
}

fn table_for(country: &str, json: bool) -> Option<&'static CountryTable> {
    let table = select_table(country);
    if table.is_none() {
        emit(
            json,
            json!({ "country": country, "mapped": false }),
            format!("{country}: no mapping"),
        );
    }
    table
}

fn print_table(table: &CountryTable, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }
    println!("{table}");
    println!("{:>6} {:>6} {:>9} {:>6}", "5G", "S1G", "MHz", "BW");
    for e in table.entries {
        println!(
            "{:>6} {:>6} {:>9.1} {:>6}",
            e.legacy_channel,
            e.halow_channel,
            e.halow_freq_mhz,
            e.bandwidth.to_string()
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => HostConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => HostConfig::default(),
    };
    let json = cli.json;

    match cli.command {
        Commands::Countries => {
            let tables = all_tables();
            let list: Vec<_> = tables
                .iter()
                .map(|t| json!({ "country": t.country, "channels": t.len() }))
                .collect();
            let text = tables
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            emit(json, json!(list), text);
        }
        Commands::Table { country } => {
            if let Some(table) = table_for(&country, json) {
                print_table(table, json)?;
            }
        }
        Commands::Lookup {
            country,
            legacy_channel,
        } => {
            if let Some(table) = table_for(&country, json) {
                match table.entry_for_legacy(legacy_channel) {
                    Some(e) => emit(
                        json,
                        serde_json::to_value(e)?,
                        format!(
                            "{country} {legacy_channel} -> S1G channel {} at {} MHz ({})",
                            e.halow_channel, e.halow_freq_mhz, e.bandwidth
                        ),
                    ),
                    None => emit(
                        json,
                        json!(null),
                        format!("{country}: 5 GHz channel {legacy_channel} is not mapped"),
                    ),
                }
            }
        }
        Commands::Freq {
            country,
            halow_channel,
        } => {
            if let Some(table) = table_for(&country, json) {
                let freq = table.freq_for_halow(halow_channel);
                let text = match freq {
                    Some(mhz) => format!("{mhz} MHz"),
                    None => format!("{country}: S1G channel {halow_channel} is not mapped"),
                };
                emit(json, json!({ "freq_mhz": freq }), text);
            }
        }
        Commands::Channel { country, freq_khz } => {
            if let Some(table) = table_for(&country, json) {
                let channel = table.halow_channel_for_freq_khz(freq_khz);
                let text = match channel {
                    Some(ch) => format!("S1G channel {ch}"),
                    None => format!("{country}: no S1G channel at {freq_khz} kHz"),
                };
                emit(json, json!({ "halow_channel": channel }), text);
            }
        }
        Commands::Bandwidth {
            country,
            halow_channel,
        } => {
            if let Some(table) = table_for(&country, json) {
                let bw = table.bandwidth_for_halow(halow_channel);
                let text = match bw {
                    Some(bw) => bw.to_string(),
                    None => format!("{country}: S1G channel {halow_channel} is not mapped"),
                };
                emit(json, json!({ "bandwidth_mhz": bw.map(|b| b.mhz()) }), text);
            }
        }
        Commands::Rate {
            rate,
            bandwidth_mhz,
        } => {
            let scaled = scale_rate(rate, bandwidth_mhz);
            let scale = rate_scale_factor(bandwidth_mhz);
            emit(
                json,
                json!({ "rate": scaled, "scale": scale }),
                format!("{scaled} (scale {scale})"),
            );
        }
        Commands::Country { set } => {
            let source: Box<dyn CountrySource> = match set {
                Some(code) => Box::new(FixedCountry(code)),
                None => Box::new(SysfsCountry::from_config(&config)),
            };
            match active_table(source.as_ref()).await {
                Some(table) => print_table(table, json)?,
                None => {
                    let code = read_country_code(source.as_ref()).await;
                    emit(
                        json,
                        json!({ "country": code, "mapped": false }),
                        format!("{code:?}: no mapping"),
                    );
                }
            }
        }
        Commands::Throughput { phy } => {
            let kbps = MmrcReader::new(config).throughput_kbps(&phy).await;
            let text = if kbps < 0 {
                "unknown".to_string()
            } else {
                format!("{kbps} kbps")
            };
            emit(json, json!({ "phy": phy, "kbps": kbps }), text);
        }
        Commands::Stats { ifname, keys } => {
            let mut slots: Vec<StatSlot> = keys.iter().map(|k| StatSlot::new(k)).collect();
            MorseCli::from_config(&config)
                .query(&ifname, &mut slots)
                .await?;
            let values: serde_json::Map<String, serde_json::Value> = slots
                .iter()
                .map(|s| (s.key.to_string(), json!(s.value)))
                .collect();
            let text = slots
                .iter()
                .map(|s| match s.value {
                    Some(v) => format!("{}: {v}", s.key),
                    None => format!("{}: unknown", s.key),
                })
                .collect::<Vec<_>>()
                .join("\n");
            emit(json, serde_json::Value::Object(values), text);
        }
    }

    Ok(())
}
