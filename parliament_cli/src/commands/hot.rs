use anyhow::Result;
use clap::Args;
use parliament_lib::types::HotItem;
use parliament_lib::{validation, Client, DetailPage, PageQuery, PagedList, Query};

use super::{settled, PageArgs};
use crate::output::{print_hot_item, print_hot_items, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct HotArgs {
    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct HotItemArgs {
    /// Item slug, as listed by `hot`
    pub slug: String,
}

pub async fn run_list(args: &HotArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let (page, page_size) = args.paging.validated()?;

    let mut list: PagedList<HotItem> = PagedList::new(page_size);
    let state = list
        .load(page, |page, size| {
            let query = PageQuery::default().with_page(page).with_page_size(size);
            async move { client.get_hot_items(&query).await }
        })
        .await;
    let items = settled(state, "Hot in parliament")?;

    print_page_summary(items, page, page_size, "items");
    print_hot_items(&items.results, format);
    Ok(())
}

pub async fn run_detail(args: &HotItemArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let slug = validation::validate_search(&args.slug)?;

    let mut page: DetailPage<String, HotItem> = DetailPage::new();
    let state = page
        .load(slug.clone(), |slug| async move { client.get_hot_item(&slug).await })
        .await;
    let item = settled(state, &format!("Item '{}'", slug))?;

    print_hot_item(item, client.media(), format);
    Ok(())
}
