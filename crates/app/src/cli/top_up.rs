use clap::Args;
use otomax_app::{
    config::DigiflazzArgs,
    ids::OrderIdGenerator,
    integrations::digiflazz::{DigiflazzClient, TopUpRequest},
};

#[derive(Debug, Args)]
pub(crate) struct TopUpArgs {
    /// Provider SKU code
    #[arg(long)]
    sku: String,

    /// Destination customer number
    #[arg(long)]
    customer_no: String,

    /// Reference id; generated when omitted
    #[arg(long)]
    ref_id: Option<String>,

    #[command(flatten)]
    digiflazz: DigiflazzArgs,
}

pub(crate) async fn run(args: TopUpArgs) -> Result<(), String> {
    let client = DigiflazzClient::new(args.digiflazz.to_config());

    let ref_id = args
        .ref_id
        .unwrap_or_else(|| OrderIdGenerator::default().next_id());

    let response = client
        .top_up(
            &TopUpRequest {
                sku_code: args.sku,
                customer_no: args.customer_no,
                ref_id,
                callback_url: None,
            },
            None,
        )
        .await
        .map_err(|error| format!("top-up failed: {error}"))?;

    println!("ref_id: {}", response.ref_id);
    println!("status: {:?}", response.status);
    println!("message: {}", response.message);

    if !response.serial_number.is_empty() {
        println!("serial_number: {}", response.serial_number);
    }

    Ok(())
}
