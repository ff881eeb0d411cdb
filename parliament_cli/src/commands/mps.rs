use anyhow::Result;
use clap::Args;
use parliament_lib::types::{Mp, MpID};
use parliament_lib::{Client, DetailPage, MpQuery, PagedList, Query};

use super::{search_term, settled, PageArgs};
use crate::output::{print_mp_detail, print_mps, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct MpsArgs {
    /// Filter by party (e.g. DPP, MCP, UTM)
    #[arg(long)]
    pub party: Option<String>,

    /// Filter by district
    #[arg(long)]
    pub district: Option<String>,

    /// Filter by constituency
    #[arg(long)]
    pub constituency: Option<String>,

    /// Search by name
    #[arg(long)]
    pub search: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct MpArgs {
    /// MP ID
    pub id: MpID,
}

pub async fn run_list(args: &MpsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let (page, page_size) = args.paging.validated()?;

    let mut query = MpQuery::default();
    if let Some(party) = search_term(&args.party)? {
        query = query.with_party(&party);
    }
    if let Some(district) = search_term(&args.district)? {
        query = query.with_district(&district);
    }
    if let Some(constituency) = search_term(&args.constituency)? {
        query = query.with_constituency(&constituency);
    }
    if let Some(search) = search_term(&args.search)? {
        query = query.with_search(&search);
    }

    let mut list: PagedList<Mp> = PagedList::new(page_size);
    let state = list
        .load(page, |page, size| {
            let query = query.clone().with_page(page).with_page_size(size);
            async move { client.get_mps(&query).await }
        })
        .await;
    let mps = settled(state, "MPs")?;

    print_page_summary(mps, page, page_size, "MPs");
    print_mps(&mps.results, format);
    Ok(())
}

pub async fn run_detail(args: &MpArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut page: DetailPage<MpID, Mp> = DetailPage::new();
    let state = page.load(args.id, |id| client.get_mp(id)).await;
    let mp = settled(state, &format!("MP {}", args.id))?;

    print_mp_detail(mp, client.media(), format);
    Ok(())
}
