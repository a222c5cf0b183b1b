use clap::{Args, Parser, Subcommand};
use tracing::info;

use cloudrider_schema::enumeration::{EnumerationRequest, ServiceSelection, SpeedTier};

use crate::credentials::environment::EnvironmentSource;
use crate::credentials::legacy::{LegacyFileSource, LEGACY_FILE_NAME};
use crate::credentials::profile::ProfileStore;
use crate::credentials::resolve::CredentialResolver;
use crate::enumerate::{EnumerateServices, LoggingEnumeration};
use crate::env_file::{self, EnvFileValues};
use crate::session::SessionFactory;

#[derive(Parser, Debug)]
#[command(name = "cloudrider", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a .env file with static AWS credentials.
    Cred(CredArgs),
    /// Resolve credentials and launch service enumeration.
    Enum(EnumArgs),
    /// List the profiles declared in the shared credentials file.
    Profiles,
}

#[derive(Args, Debug)]
struct CredArgs {
    /// AWS region.
    #[arg(long)]
    aws_region: Option<String>,

    /// AWS access key ID.
    #[arg(long)]
    aws_access_key_id: Option<String>,

    /// AWS secret access key.
    #[arg(long)]
    aws_secret_access_key: Option<String>,

    /// AWS session token.
    #[arg(long)]
    aws_session_token: Option<String>,
}

#[derive(Args, Debug)]
struct EnumArgs {
    /// Services to enumerate: "all" or a comma separated list (e.g. iam,s3,sts).
    #[arg(long, default_value = "all")]
    services: String,

    /// Enumeration speed: slow, normal or fast.
    #[arg(long, default_value = "normal")]
    speed: String,

    /// Profile to read from the shared credentials file.
    #[arg(long)]
    profile: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Cred(args) => run_cred(args),
            Command::Enum(args) => run_enum(args).await,
            Command::Profiles => run_profiles(),
        }
    }
}

fn run_cred(args: CredArgs) -> anyhow::Result<()> {
    let values = EnvFileValues {
        region: args.aws_region,
        access_key_id: args.aws_access_key_id,
        secret_access_key: args.aws_secret_access_key,
        session_token: args.aws_session_token,
    };
    env_file::write(LEGACY_FILE_NAME, &values)?;
    info!(
        "wrote AWS credentials to {} in the current folder",
        LEGACY_FILE_NAME
    );
    Ok(())
}

async fn run_enum(args: EnumArgs) -> anyhow::Result<()> {
    let resolver = CredentialResolver::new(
        ProfileStore::new()?,
        EnvironmentSource,
        LegacyFileSource::new(),
    );

    let record = resolver.resolve(args.profile.as_deref())?;
    info!("using credentials from: {}", record.origin());
    if let Some(region) = record.region() {
        info!("region: {}", region);
    }

    let session = SessionFactory.create(&record).await?;
    let request = EnumerationRequest {
        services: ServiceSelection::parse(&args.services),
        speed: SpeedTier::from(args.speed.as_str()),
    };

    LoggingEnumeration.enumerate(&session, &request).await?;
    info!("enumeration finished");
    Ok(())
}

fn run_profiles() -> anyhow::Result<()> {
    let names = ProfileStore::new()?.profile_names()?;
    if names.is_empty() {
        info!("no profiles found in the shared credentials file");
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }
    Ok(())
}
