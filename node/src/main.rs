use anyhow::Context as _;
use clap::{value_parser, Arg, Command};
use commonware_runtime::{deterministic, tokio, Clock, Metrics, Runner, Spawner};
use futures::StreamExt;
use gamehub_node::{
    engine::{self, Engine},
    script, Config, ValidatedConfig,
};
use gamehub_simulator::Simulator;
use gamehub_types::gaming::Snapshot;
use rand::RngCore;
use std::sync::Arc;
use tracing::{debug, info, warn};

fn main() -> anyhow::Result<()> {
    // Parse arguments
    let matches = Command::new("gamehub-node")
        .about("Run the gamehub store against a simulated backend.")
        .arg(Arg::new("config").long("config").required(true))
        .arg(
            Arg::new("seed")
                .long("seed")
                .required(false)
                .value_parser(value_parser!(u64))
                .help("Run on the deterministic runtime with this seed"),
        )
        .get_matches();

    // Load config
    let config_file = matches
        .get_one::<String>("config")
        .context("missing --config")?;
    let config_file = std::fs::read_to_string(config_file)
        .with_context(|| format!("could not read config file {config_file}"))?;
    let config: Config =
        serde_yaml::from_str(&config_file).context("could not parse config file")?;
    let config = config.validate().context("invalid config")?;

    // Start runtime
    let snapshot = match matches.get_one::<u64>("seed") {
        Some(seed) => {
            let subscriber = tracing_subscriber::fmt().with_max_level(config.log_level);
            if config.log_json {
                subscriber.json().init();
            } else {
                subscriber.init();
            }
            let cfg = deterministic::Config::default().with_seed(*seed);
            deterministic::Runner::from(cfg).start(|context| run(context, config))?
        }
        None => {
            let cfg = tokio::Config::default()
                .with_worker_threads(config.worker_threads)
                .with_catch_panics(true);
            tokio::Runner::new(cfg).start(|context| async move {
                tokio::telemetry::init(
                    context.with_label("telemetry"),
                    tokio::telemetry::Logging {
                        level: config.log_level,
                        json: config.log_json,
                    },
                    None,
                    None,
                );
                run(context, config).await
            })?
        }
    };

    println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
    Ok(())
}

async fn run<E>(context: E, config: ValidatedConfig) -> anyhow::Result<Arc<Snapshot>>
where
    E: Clock + Spawner + Metrics + RngCore + Clone + Send + Sync + 'static,
{
    // Wire the store, feed, and session
    let backend = Simulator::new(context.with_label("simulator"), config.simulator.clone());
    let engine = Engine::new(
        context.with_label("engine"),
        engine::Config {
            backend,
            user_id: config.user_id.clone(),
            store: config.store(),
            feed: config.feed.clone(),
        },
    );
    let mut mailbox = engine.mailbox();
    let session = engine.session();
    let handles = engine.start();

    // Log every published snapshot
    let mut updates = mailbox.subscribe().await?;
    let logger = context.with_label("logger").spawn(|_| async move {
        while let Some(snapshot) = updates.next().await {
            debug!(
                total_pool = snapshot.total_jackpot_pool,
                available_prizes = snapshot.available_prizes.len(),
                unread_messages = snapshot.unread_messages(),
                notifications = snapshot.notifications.len(),
                in_flight = snapshot.in_flight,
                "snapshot published"
            );
        }
    });

    // Load, then replay the script
    if let Err(e) = session.load().await {
        warn!(error = %e, "initial load failed");
    }
    let failed = script::run(&context, &session, &config.script).await;
    info!(
        actions = config.script.len(),
        failed, "script finished"
    );

    // Let the feed run before stopping
    context.sleep(config.run_duration).await;
    handles.feed.stop();
    let snapshot = mailbox.snapshot().await?;
    logger.abort();
    handles.store.abort();
    info!(
        total_pool = snapshot.total_jackpot_pool,
        claimed_prizes = snapshot.claimed_prizes.len(),
        daily_prizes_remaining = snapshot.daily_prizes_remaining,
        "run complete"
    );
    Ok(snapshot)
}
