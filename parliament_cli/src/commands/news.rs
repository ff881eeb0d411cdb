use anyhow::Result;
use clap::Args;
use parliament_lib::types::NewsArticle;
use parliament_lib::{validation, Client, DetailPage, NewsQuery, PagedList, Query};

use super::{search_term, settled, PageArgs};
use crate::output::{print_article, print_articles, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct NewsArgs {
    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,

    /// Search headlines and text
    #[arg(long)]
    pub search: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct ArticleArgs {
    /// Article slug, as listed by `news`
    pub slug: String,
}

pub async fn run_list(args: &NewsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let (page, page_size) = args.paging.validated()?;

    let mut query = NewsQuery::default();
    if let Some(category) = search_term(&args.category)? {
        query = query.with_category(&category);
    }
    if let Some(search) = search_term(&args.search)? {
        query = query.with_search(&search);
    }

    let mut list: PagedList<NewsArticle> = PagedList::new(page_size);
    let state = list
        .load(page, |page, size| {
            let query = query.clone().with_page(page).with_page_size(size);
            async move { client.get_news(&query).await }
        })
        .await;
    let articles = settled(state, "News")?;

    print_page_summary(articles, page, page_size, "articles");
    print_articles(&articles.results, format);
    Ok(())
}

pub async fn run_detail(args: &ArticleArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let slug = validation::validate_search(&args.slug)?;

    let mut page: DetailPage<String, NewsArticle> = DetailPage::new();
    let state = page
        .load(slug.clone(), |slug| async move { client.get_news_article(&slug).await })
        .await;
    let article = settled(state, &format!("Article '{}'", slug))?;

    print_article(article, client.media(), format);
    Ok(())
}
