use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::{AddExtensionLayer, Router};
use serde_json::Value;
use structopt::StructOpt;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span};
use tracing_futures::Instrument;

use gpuid_core::{Generator, GpuidError, Places, Profiles, RawPlace};
use gpuid_web::gpuid_handler::{
    gpuid_handler, health_handler, results_schema_handler, schema_handler,
};
use gpuid_web::init_logging;

#[derive(StructOpt)]
#[structopt(about = "Ground place unique identifiers for place records")]
struct CliArgs {
    #[structopt(long = "log-level", case_insensitive = true, default_value = "INFO")]
    log_level: tracing::Level,
    /// JSON file overriding the cluster / group profiles
    #[structopt(long, parse(from_os_str))]
    profiles: Option<PathBuf>,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Identify the places of a JSON file (stdin when omitted) and print them
    Generate {
        #[structopt(parse(from_os_str))]
        input: Option<PathBuf>,
        /// Drop invalid records instead of failing the whole batch
        #[structopt(long)]
        skip_invalid: bool,
        #[structopt(long)]
        pretty: bool,
    },
    /// Serve POST /gpuid over HTTP
    Serve {
        #[structopt(long, default_value = "3001")]
        port: u16,
    },
}

fn load_generator(profiles: Option<PathBuf>) -> Result<Generator, GpuidError> {
    let profiles = match profiles {
        None => Profiles::default(),
        Some(path) => {
            info!("profiles {path:?}");
            let raw = std::fs::read_to_string(&path).map_err(|err| {
                GpuidError::Configuration(format!("cannot read {}: {}", path.display(), err))
            })?;
            Profiles::from_json(&raw)?
        }
    };
    Generator::new(profiles)
}

fn read_input(input: Option<PathBuf>) -> Result<Value, GpuidError> {
    let json = match input {
        Some(path) => {
            info!("file {path:?}");
            let fo = File::open(&path).map_err(|err| {
                GpuidError::Configuration(format!("cannot open {}: {}", path.display(), err))
            })?;
            serde_json::from_reader(BufReader::new(fo))?
        }
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw).map_err(|err| {
                GpuidError::Configuration(format!("cannot read stdin: {}", err))
            })?;
            serde_json::from_str(&raw)?
        }
    };
    Ok(json)
}

fn generate(
    generator: &Generator,
    input: Option<PathBuf>,
    skip_invalid: bool,
    pretty: bool,
) -> Result<(), GpuidError> {
    let places = Places::<RawPlace>::from_json(read_input(input)?)?;
    let output = match places {
        Places::Many(raws) if skip_invalid => {
            let report = generator.process_isolated(raws);
            for (index, err) in report.failures.iter() {
                error!("Error for record {}: {}", index, err);
            }
            info!(
                "{} places identified, {} skipped",
                report.places.len(),
                report.failures.len()
            );
            Places::Many(report.places)
        }
        places => generator.generate(places)?,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if pretty {
        serde_json::to_writer_pretty(&mut out, &output)
    } else {
        serde_json::to_writer(&mut out, &output)
    };
    written?;
    writeln!(out).map_err(|err| GpuidError::Configuration(format!("cannot write stdout: {}", err)))
}

async fn serve(generator: Generator, port: u16) -> Result<(), hyper::Error> {
    let app = Router::new()
        .route("/gpuid", post(gpuid_handler))
        .route("/schema", get(schema_handler))
        .route("/results-schema", get(results_schema_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(AddExtensionLayer::new(Arc::new(generator))),
        );
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .instrument(info_span!("server", %addr))
        .await
}

#[tokio::main]
async fn main() {
    let args = CliArgs::from_args();
    if let Err(err) = init_logging(args.log_level) {
        eprintln!("{}", err);
        process::exit(2);
    }

    let generator = match load_generator(args.profiles) {
        Ok(generator) => generator,
        Err(err) => {
            error!("{}", err);
            process::exit(2);
        }
    };
    match args.cmd {
        Command::Generate {
            input,
            skip_invalid,
            pretty,
        } => {
            if let Err(err) = generate(&generator, input, skip_invalid, pretty) {
                error!("{}", err);
                process::exit(1);
            }
        }
        Command::Serve { port } => {
            if let Err(err) = serve(generator, port).await {
                error!("server error: {}", err);
                process::exit(1);
            }
        }
    }
}
