use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use message_core::address::{native_from_canonical, Address, ChainType};
use message_core::batch::message_ids;
use message_core::codec::MessageEncoder;
use message_core::config::MessageConfig;
use message_core::types::Message;
use message_core::utils::{decode_hex, to_hex};
use message_core::vectors::{generate_vectors, load_vectors, verify_vectors, write_vectors};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aetherium-message")]
#[command(about = "Encode, decode and identify Aetherium cross-chain messages")]
struct Cli {
    #[arg(long)]
    config: Option<String>,

    /// Overrides the protocol version from the config file.
    #[arg(long)]
    version_byte: Option<u8>,

    #[arg(long)]
    max_body_len: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a message and print its bytes and id
    Encode {
        #[arg(long)]
        nonce: u32,
        #[arg(long)]
        origin: u32,
        #[arg(long)]
        sender: String,
        #[arg(long)]
        destination: u32,
        #[arg(long)]
        recipient: String,
        #[arg(long, default_value = "0x")]
        body: String,
    },
    /// Print every field of an encoded message
    Decode {
        message: String,
        #[arg(long, value_enum, default_value_t = ChainArg::Evm)]
        chain_type: ChainArg,
    },
    /// Print the id of one or more encoded messages
    Id {
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// Check a conformance vector file against this implementation
    VerifyVectors { path: String },
    /// Write the standard conformance vector set
    GenerateVectors { path: String },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ChainArg {
    Evm,
    Svm,
}

impl From<ChainArg> for ChainType {
    fn from(arg: ChainArg) -> Self {
        match arg {
            ChainArg::Evm => ChainType::Evm,
            ChainArg::Svm => ChainType::Svm,
        }
    }
}

fn load_config(cli: &Cli) -> Result<MessageConfig> {
    let mut config = match &cli.config {
        Some(path) => MessageConfig::load_from_file(path)?,
        None => MessageConfig::default(),
    };
    if let Some(version) = cli.version_byte {
        config.version = version;
    }
    if cli.max_body_len.is_some() {
        config.max_body_len = cli.max_body_len;
    }
    Ok(config)
}

fn verify_vector_file(path: &str, version: u8) -> Result<usize> {
    let vectors = load_vectors(path)?;
    let report = verify_vectors(&vectors, version);
    tracing::info!(passed = report.passed, failed = report.mismatches.len(), path, "vectors checked");

    if !report.is_ok() {
        return Err(anyhow!("{} of {} vectors did not match", report.mismatches.len(), vectors.len()));
    }
    Ok(report.passed)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!(version = config.version, "message encoder starting");

    match cli.command {
        Commands::Encode { nonce, origin, sender, destination, recipient, body } => {
            let encoder = MessageEncoder::new(&config);
            let sender = Address::from_hex(&sender)?;
            let recipient = Address::from_hex(&recipient)?;
            let body = decode_hex(&body)?;

            let encoded = encoder.encode(nonce, origin, &sender, destination, &recipient, &body)?;
            let message = Message::from_bytes(&encoded)?;

            println!("message: {}", to_hex(&encoded));
            println!("id:      {}", to_hex(message.id()));
        }
        Commands::Decode { message, chain_type } => {
            let bytes = decode_hex(&message)?;
            let message = Message::from_bytes(&bytes)?;

            println!("id:          {}", to_hex(message.id()));
            println!("version:     {}", message.version);
            println!("nonce:       {}", message.nonce);
            println!("origin:      {}", message.origin);
            println!("sender:      {}", to_hex(message.sender));
            println!("destination: {}", message.destination);
            println!("recipient:   {}", to_hex(message.recipient));
            match native_from_canonical(chain_type.into(), &message.recipient) {
                Ok(native) => println!("recipient address: {}", to_hex(native)),
                Err(e) => println!("recipient address: {}", e),
            }
            println!("body:        {}", to_hex(&message.body));
        }
        Commands::Id { messages } => {
            let decoded = messages
                .iter()
                .map(|m| decode_hex(m))
                .collect::<Result<Vec<_>, _>>()?;
            for id in message_ids(decoded).await? {
                println!("{}", to_hex(id));
            }
        }
        Commands::VerifyVectors { path } => {
            let passed = verify_vector_file(&path, config.version)?;
            println!("{} vectors match", passed);
        }
        Commands::GenerateVectors { path } => {
            let vectors = generate_vectors(config.version);
            write_vectors(&path, &vectors)?;
            tracing::info!(count = vectors.len(), path = %path, "wrote conformance vectors");
        }
    }

    Ok(())
}
