use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod annotate;
mod diagnostics;
mod generate;
mod render;
mod spec;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "swagger-doc")]
#[command(about = "Post-process API specifications and generate a viewer page", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the annotated specification and its HTML viewer.
    Generate {
        /// Specification JSON produced by the annotation extractor; `-` reads stdin.
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        input: String,

        /// The destination directory to write the documentation files to.
        #[arg(short, long, value_name = "DIR", default_value = "docs")]
        output: PathBuf,

        /// The intermediate directory within the output directory to write the files to.
        #[arg(short, long, value_name = "DIR", default_value = "api")]
        api: String,

        /// The base name to use for the definition files.
        #[arg(short, long, default_value = "swagger")]
        name: String,

        /// The title for the HTML page. Defaults to the base name.
        #[arg(short, long, value_name = "TEXT")]
        title: Option<String>,

        /// An additional server URL for the viewer.
        #[arg(short = 'u', long = "url", value_name = "URL")]
        url: Option<String>,

        /// Embed the specification directly in the HTML page.
        #[arg(short, long)]
        embedded: bool,

        /// Comma-separated tags to keep; prefix with '!' to exclude.
        #[arg(short = 'g', long, value_name = "TAG1,TAG2")]
        tags: Option<String>,

        /// Keep only the first tag of each operation.
        #[arg(short, long, alias = "firstTagOnly")]
        first_tag_only: bool,

        /// Skip writing index.html.
        #[arg(long)]
        no_html: bool,

        /// Comma-separated tag:color pairs to render as badges.
        #[arg(short, long, value_name = "TAG:COLOR,...", default_value = "")]
        badges: String,
    },
}

fn main() {
    let cli = Cli::parse();
    diagnostics::init(cli.verbose);

    if let Err(err) = run(cli) {
        println!("{}", diagnostics::error_message(&err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.cmd {
        Commands::Generate {
            input,
            output,
            api,
            name,
            title,
            url,
            embedded,
            tags,
            first_tag_only,
            no_html,
            badges,
        } => {
            let opts = generate::GenerateOptions {
                input,
                output_dir: output,
                api_dir: api,
                base_name: name,
                title,
                server_url: url,
                embedded,
                tags,
                first_tag_only,
                generate_html: !no_html,
                badges,
            };

            let written = generate::generate(&opts)?;
            println!("Wrote {}", written.spec_file.display());
            if let Some(html) = written.html_file {
                println!("Wrote {}", html.display());
            }
        }
    }

    Ok(())
}
