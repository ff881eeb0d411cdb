use anyhow::Result;
use clap::Args;
use parliament_lib::{Client, ContactForm};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ContactArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Reply-to email address
    #[arg(long)]
    pub email: String,

    /// Subject line
    #[arg(long)]
    pub subject: String,

    /// Message body
    #[arg(long)]
    pub message: String,
}

pub async fn run(args: &ContactArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut form = ContactForm::new();
    form.name = args.name.clone();
    form.email = args.email.clone();
    form.subject = args.subject.clone();
    form.message = args.message.clone();

    let confirmation = form.submit(client).await?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "message": confirmation })),
        _ => println!("{}", confirmation),
    }
    Ok(())
}
