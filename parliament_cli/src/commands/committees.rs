use anyhow::Result;
use clap::Args;
use parliament_lib::types::{Committee, CommitteeID};
use parliament_lib::{Client, DetailPage, PageQuery, PagedList, Query};

use super::{settled, PageArgs};
use crate::output::{print_committee_detail, print_committees, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct CommitteesArgs {
    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct CommitteeArgs {
    /// Committee ID
    pub id: CommitteeID,
}

pub async fn run_list(args: &CommitteesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let (page, page_size) = args.paging.validated()?;

    let mut list: PagedList<Committee> = PagedList::new(page_size);
    let state = list
        .load(page, |page, size| {
            let query = PageQuery::default().with_page(page).with_page_size(size);
            async move { client.get_committees(&query).await }
        })
        .await;
    let committees = settled(state, "Committees")?;

    print_page_summary(committees, page, page_size, "committees");
    print_committees(&committees.results, format);
    Ok(())
}

pub async fn run_detail(args: &CommitteeArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut page: DetailPage<CommitteeID, Committee> = DetailPage::new();
    let state = page.load(args.id, |id| client.get_committee(id)).await;
    let committee = settled(state, &format!("Committee {}", args.id))?;

    print_committee_detail(committee, client.media(), format);
    Ok(())
}
