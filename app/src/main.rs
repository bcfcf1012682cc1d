use std::path::PathBuf;

use clap::Parser;
use common::config::{ChartStyle, Config, DEFAULT_TITLE, DEFAULT_X_LABEL, Options};
use eyre::Result;
use plot_common::collect_dataset;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const MODULES: &[&str] = &["common", "fio", "plot_common", "fio_bars"];

/// Plot read and write results of fio JSON reports as a grouped bar chart
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Input directory containing JSON files from fio
    #[arg(long)]
    input: Option<String>,
    /// Output image file for the plot
    #[arg(long)]
    output: Option<String>,
    /// Title of the plot
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
    /// Label for the x-axis
    #[arg(long, default_value = DEFAULT_X_LABEL)]
    xlabel: String,
    /// Label for the y-axis
    #[arg(long)]
    ylabel: Option<String>,
    /// Type of value to plot: 'bw' for bandwidth, 'iops' for IOPS
    #[arg(long, default_value = "bw")]
    value_type: String,
    /// YAML file overriding chart colors, sizes and fonts
    #[arg(long)]
    style: Option<PathBuf>,
    #[arg(short, long)]
    log: Vec<String>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            input: self.input.clone(),
            output: self.output.clone(),
            title: Some(self.title.clone()),
            x_label: Some(self.xlabel.clone()),
            y_label: self.ylabel.clone(),
            value_type: Some(self.value_type.clone()),
            style: ChartStyle::default(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log)?;

    if let Err(err) = run(&args).await {
        error!("{err:#?}");
        return Err(err);
    }
    Ok(())
}

fn init_tracing(directives: &[String]) -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let mut env_filter = EnvFilter::new(format!("fio_plot={log_level}"));

    for log in directives {
        env_filter = env_filter.add_directive(log.parse()?);
    }

    for module in MODULES {
        if !directives.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
    Ok(())
}

async fn run(args: &Cli) -> Result<()> {
    let mut config = Config::try_from(args.options())?;
    if let Some(path) = &args.style {
        config.chart.style = ChartStyle::load(path).await?;
    }
    info!(
        "Plotting {:?} from {:?} to {:?}",
        config.chart.value_type, config.input, config.chart.output
    );

    let dataset = collect_dataset(&config.input, config.chart.value_type).await?;
    fio_bars::render(&dataset, &config.chart)?;

    println!("Plot saved as {}", config.chart.output.display());
    Ok(())
}
