use crate::comps::JsonDatasetSource;
use crate::config::AppConfig;
use crate::llm::OpenAiClient;
use crate::optimizer::Pipeline;
use crate::prompt::TemplateComposer;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod comps;
mod config;
mod domain;
mod errors;
mod llm;
mod optimizer;
mod prompt;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Resolve configuration once; everything below receives it explicitly.
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            std::process::exit(1);
        }
    };

    // 2️⃣ Wire the pipeline
    let pipeline = match build_pipeline(&cfg) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "failed to build pipeline");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = cfg.server.bind_addr;
    tracing::info!(
        %addr,
        workers = cfg.server.max_workers,
        dataset = %cfg.comps.dataset_path.display(),
        model = %cfg.generation.model,
        "starting server"
    );

    let server = Server::bind(addr).max_workers(cfg.server.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &pipeline) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}

fn build_pipeline(cfg: &AppConfig) -> Result<Pipeline, Box<dyn std::error::Error>> {
    let source = JsonDatasetSource::from_config(&cfg.comps);
    let composer = TemplateComposer::from_config(&cfg.prompt)?;
    let generator = OpenAiClient::from_config(&cfg.generation)?;
    tracing::debug!(model = generator.model(), "generation client ready");

    Ok(Pipeline::new(
        Box::new(source),
        Box::new(composer),
        Box::new(generator),
    ))
}
