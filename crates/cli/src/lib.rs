//! The commands of the `druid-sql` command-line tool.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Subcommand;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use druid_sql_configuration::{Configuration, ParsedConfiguration};
use query_engine_translation::translation;

/// The various commands supported by the tool.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Translate a native query document into SQL.
    Translate {
        /// The file holding the query document. Standard input is read when omitted.
        file: Option<PathBuf>,
        /// Format the SQL over several lines.
        #[arg(long)]
        pretty: bool,
    },
    /// Write the default configuration, and its JSON schema, to the configuration directory.
    Initialize,
}

/// The environment the commands run in.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Where the configuration lives. Without one, translation uses the defaults.
    pub configuration_dir: Option<PathBuf>,
}

/// Run a command, writing its output to standard output.
pub async fn run(command: Command, context: Context) -> anyhow::Result<()> {
    match command {
        Command::Translate { file, pretty } => {
            let document = read_document(file.as_deref()).await?;
            let sql = translate(&context, &document, pretty).await?;
            let mut stdout = tokio::io::stdout();
            stdout.write_all(sql.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
        Command::Initialize => initialize(&context).await?,
    }
    Ok(())
}

/// Translate a query document with the configuration from the context.
pub async fn translate(context: &Context, document: &str, pretty: bool) -> anyhow::Result<String> {
    let configuration = read_configuration(context).await?;
    let sql = translation::convert_json_to_sql(&configuration, document)?;
    if pretty {
        Ok(sqlformat::format(
            &sql,
            &sqlformat::QueryParams::None,
            sqlformat::FormatOptions::default(),
        ))
    } else {
        Ok(sql)
    }
}

/// Write the initial configuration, and its JSON schema.
pub async fn initialize(context: &Context) -> anyhow::Result<()> {
    let dir = context
        .configuration_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    druid_sql_configuration::write_parsed_configuration(ParsedConfiguration::initial(), &dir)
        .await?;
    tracing::info!(dir = %dir.display(), "initialized configuration");
    Ok(())
}

async fn read_configuration(context: &Context) -> anyhow::Result<Configuration> {
    match &context.configuration_dir {
        None => Ok(Configuration::default()),
        Some(dir) => {
            let parsed = druid_sql_configuration::parse_configuration(dir).await?;
            Ok(druid_sql_configuration::make_runtime_configuration(parsed)?)
        }
    }
}

async fn read_document(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("could not read {}", path.display())),
        None => {
            let mut document = String::new();
            tokio::io::stdin()
                .read_to_string(&mut document)
                .await
                .context("could not read the query from standard input")?;
            Ok(document)
        }
    }
}
