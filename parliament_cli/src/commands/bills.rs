use anyhow::{anyhow, Result};
use clap::Args;
use parliament_lib::types::{Bill, BillID, BillStatus, Engagement};
use parliament_lib::{BillQuery, Client, DetailPage, PagedList, Query};

use super::{search_term, settled, PageArgs};
use crate::output::{print_bill_detail, print_bills, print_json, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct BillsArgs {
    /// Filter by status: introduced, committee, first-reading,
    /// second-reading, third-reading, assented
    #[arg(long)]
    pub status: Option<String>,

    /// Search bill titles
    #[arg(long)]
    pub search: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct BillArgs {
    /// Bill ID
    pub id: BillID,
}

#[derive(Args)]
pub struct EngageArgs {
    /// Bill ID
    pub id: BillID,
}

pub async fn run_list(args: &BillsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let (page, page_size) = args.paging.validated()?;

    let mut query = BillQuery::default();
    if let Some(status) = &args.status {
        let status: BillStatus = status.parse().map_err(|e: String| anyhow!(e))?;
        query = query.with_status(status);
    }
    if let Some(search) = search_term(&args.search)? {
        query = query.with_search(&search);
    }

    let mut list: PagedList<Bill> = PagedList::new(page_size);
    let state = list
        .load(page, |page, size| {
            let query = query.clone().with_page(page).with_page_size(size);
            async move { client.get_bills(&query).await }
        })
        .await;
    let bills = settled(state, "Bills")?;

    print_page_summary(bills, page, page_size, "bills");
    print_bills(&bills.results, format);
    Ok(())
}

pub async fn run_detail(args: &BillArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut page: DetailPage<BillID, Bill> = DetailPage::new();
    let state = page.load(args.id, |id| client.get_bill(id)).await;
    let bill = settled(state, &format!("Bill {}", args.id))?;

    print_bill_detail(bill, client.media(), format);
    Ok(())
}

pub async fn run_engage(
    args: &EngageArgs,
    engagement: Engagement,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let count = client.engage_bill(args.id, engagement).await?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "id": args.id,
            engagement.counter_field(): count,
        })),
        _ => println!(
            "Bill {} now has {} {}",
            args.id,
            count,
            engagement.counter_field()
        ),
    }
    Ok(())
}
