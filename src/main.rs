use clap::Parser;
use wger_client::config::cli::Command;
use wger_client::utils::logger;
use wger_client::{ApiResponse, CliConfig, ExerciseQuery, Result, WgerService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = match cli.client_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };
    tracing::debug!("Using API at {}", config.base_url);

    let service = WgerService::new(config);

    match run(&service, cli.command).await {
        Ok(response) => {
            tracing::info!("Request completed with status {}", response.status);
            println!("{}", serde_json::to_string_pretty(&response.data)?);
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(service: &WgerService, command: Command) -> Result<ApiResponse> {
    match command {
        Command::Exercises { offset, filters } => {
            let query = ExerciseQuery { offset, filters };
            service.get_exercises(&query).await
        }
        Command::ExerciseInfo { id } => service.get_exercise_info(id).await,
        Command::Categories => service.get_categories().await,
        Command::Routines => service.get_routines().await,
        Command::Routine { id } => service.get_routine_detail(id).await,
        Command::RoutineStructure { id } => service.get_routine_structure(id).await,
        Command::Save { kind, data } => {
            let payload: serde_json::Value = serde_json::from_str(&data)?;
            service.save_data(&kind, &payload).await
        }
        Command::CreateSlot { data } => {
            let payload: serde_json::Value = serde_json::from_str(&data)?;
            service.create_routine_slot(&payload).await
        }
        Command::CreateSlotEntry { data } => {
            let payload: serde_json::Value = serde_json::from_str(&data)?;
            service.create_routine_slot_entry(&payload).await
        }
    }
}
