use clap::Parser;
use rocket_cart::domain::{ConfigProvider, Notifier};
use rocket_cart::utils::logger::{self, LogFormat};
use rocket_cart::utils::validation::Validate;
use rocket_cart::{
    ApiClient, Cart, CartActor, CartContainer, CartSettings, CliConfig, Command, ConsoleNotifier,
    FileStore, TomlConfig, TracingNotifier, UpdateProductAmount,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // defaults < config file < flags
    let (settings, file) = match cli.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // logging
    let verbose = cli.verbose || file.as_ref().is_some_and(TomlConfig::verbose);
    let format = file
        .as_ref()
        .map(TomlConfig::log_format)
        .unwrap_or_default();
    logger::init_logger(format, verbose);

    tracing::info!("Starting rocket-cart CLI");
    tracing::debug!("Settings: {:?}", settings);

    // validate before touching the network or the disk
    if let Some(file) = &file {
        if let Err(e) = file.validate() {
            tracing::error!("❌ Configuration file validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // a JSON log stream means nobody reads stderr toasts
    match format {
        LogFormat::Compact => run(cli.command, &settings, ConsoleNotifier).await,
        LogFormat::Json => run(cli.command, &settings, TracingNotifier).await,
    }
}

async fn run<N>(command: Command, settings: &CartSettings, notifier: N) -> anyhow::Result<()>
where
    N: Notifier + 'static,
{
    let api = ApiClient::from_config(settings)?;
    let store = FileStore::new(settings.storage_path());
    let container = CartContainer::load(
        api.clone(),
        api,
        store,
        notifier,
        settings.storage_key(),
    )
    .await;
    let (cart, actor) = CartActor::spawn(container, 32);

    match command {
        Command::Show => {}
        Command::Add { product_id } => cart.add_product(product_id).await?,
        Command::Remove { product_id } => cart.remove_product(product_id).await?,
        Command::Update { product_id, amount } => {
            cart.update_product_amount(UpdateProductAmount { product_id, amount })
                .await?
        }
    }

    print_cart(&cart.cart().await?);

    // drain the queue before exiting
    cart.shutdown().await?;
    actor.await?;
    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    println!("🛒 {} product(s), {} unit(s)", cart.len(), cart.total_amount());
    for item in cart.items() {
        println!(
            "  #{:<6} {:>3} x {} ({:.2})",
            item.id(),
            item.amount,
            item.product.title,
            item.product.price
        );
    }
}
