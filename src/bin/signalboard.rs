use egostrategy_signalboard::config::Config;
use egostrategy_signalboard::loader::RecordSet;
use egostrategy_signalboard::models::view::AnalysisView;
use egostrategy_signalboard::services::dashboard::DashboardState;
use egostrategy_signalboard::services::report;

use clap::{App, Arg, SubCommand};
use log::{info, warn};
use std::error::Error;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let config = Config::new();
    let default_file = config.data_path().display().to_string();

    let file_arg = Arg::with_name("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .help("CSV file with stock metrics")
        .takes_value(true)
        .default_value(&default_file);

    let app = App::new("SignalBoard")
        .version("1.0.0")
        .author("EgoStrategy Team")
        .about("Stock indicator signal board")
        .subcommand(
            SubCommand::with_name("show")
                .about("Show indicator signals for one stock")
                .arg(file_arg.clone())
                .arg(
                    Arg::with_name("symbol")
                        .short('s')
                        .long("symbol")
                        .value_name("SYMBOL")
                        .help("Stock symbol to select (defaults to the first record)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("view")
                        .short('v')
                        .long("view")
                        .value_name("VIEW")
                        .help("View to render (overview, technical, fundamental, charts, all)")
                        .takes_value(true)
                        .default_value("overview"),
                )
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("Print the selected stock as JSON")
                        .takes_value(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("list")
                .about("List loaded stocks")
                .arg(file_arg)
                .arg(
                    Arg::with_name("limit")
                        .short('l')
                        .long("limit")
                        .value_name("LIMIT")
                        .help("Limit the number of records to display")
                        .takes_value(true)
                        .default_value("50"),
                ),
        );

    let matches = app.get_matches();

    if let Some(matches) = matches.subcommand_matches("show") {
        let path = PathBuf::from(matches.value_of("file").unwrap_or(&default_file));
        let view_arg = matches.value_of("view").unwrap_or("overview");

        // 先解析视图参数，避免加载后才报错
        let views: Vec<AnalysisView> = if view_arg.eq_ignore_ascii_case("all") {
            AnalysisView::ALL.to_vec()
        } else {
            vec![view_arg.parse::<AnalysisView>()?]
        };

        let records = RecordSet::load(&path).await;
        let mut state = DashboardState::new(records, &config);

        if let Some(symbol) = matches.value_of("symbol") {
            if !state.select(symbol) {
                warn!("No stock selected, {} is not in {}", symbol, path.display());
            }
        }

        if matches.is_present("json") {
            state.set_view(views[0]);
            println!("{}", report::render_json(&state)?);
            return Ok(());
        }

        println!("{}", report::render_header(&state));
        for view in views {
            state.set_view(view);
            println!();
            println!("[{}]", view.title());
            println!("{}", report::render_view(&state));
        }
        println!();
        println!("{}", report::render_footer());
    } else if let Some(matches) = matches.subcommand_matches("list") {
        let path = PathBuf::from(matches.value_of("file").unwrap_or(&default_file));
        let limit = matches.value_of("limit")
            .unwrap_or("50")
            .parse::<usize>()
            .unwrap_or(50);

        let records = RecordSet::load(&path).await;
        info!("Found {} stocks", records.len());

        for stock in records.all().iter().take(limit) {
            println!("{} - {}", stock.symbol, stock.name);
        }

        if records.len() > limit {
            println!("... and {} more records", records.len() - limit);
        }
    } else {
        info!("No command specified. Use --help for usage information.");
    }

    Ok(())
}
