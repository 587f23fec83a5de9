use clap::Parser;
use gimmeanuuid::cli::{
    handle_completions, handle_config_init, run_generate, Cli, Commands, ConfigCommands,
    UuidRequest,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::V1(args) => run_generate(UuidRequest::V1, &args.connection).await,
        Commands::V2(args) => {
            run_generate(UuidRequest::V2 { domain: args.domain }, &args.connection).await
        }
        Commands::V3(args) => {
            let request = UuidRequest::V3 {
                namespace: args.namespace,
                name: args.name,
            };
            run_generate(request, &args.connection).await
        }
        Commands::V4(args) => run_generate(UuidRequest::V4, &args.connection).await,
        Commands::V5(args) => {
            let request = UuidRequest::V5 {
                namespace: args.namespace,
                name: args.name,
            };
            run_generate(request, &args.connection).await
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
