use anyhow::Result;
use clap::Args;
use parliament_lib::types::{Loan, LoanID};
use parliament_lib::{Client, DetailPage, LoanQuery, PagedList, Query};

use super::{search_term, settled, PageArgs};
use crate::output::{print_loan_detail, print_loans, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct LoansArgs {
    /// Filter by sector (e.g. Energy, Health)
    #[arg(long)]
    pub sector: Option<String>,

    /// Search lender and description
    #[arg(long)]
    pub search: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct LoanArgs {
    /// Loan ID
    pub id: LoanID,
}

pub async fn run_list(args: &LoansArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let (page, page_size) = args.paging.validated()?;

    let mut query = LoanQuery::default();
    if let Some(sector) = search_term(&args.sector)? {
        query = query.with_sector(&sector);
    }
    if let Some(search) = search_term(&args.search)? {
        query = query.with_search(&search);
    }

    let mut list: PagedList<Loan> = PagedList::new(page_size);
    let state = list
        .load(page, |page, size| {
            let query = query.clone().with_page(page).with_page_size(size);
            async move { client.get_loans(&query).await }
        })
        .await;
    let loans = settled(state, "Loans")?;

    print_page_summary(loans, page, page_size, "loans");
    print_loans(&loans.results, format);
    Ok(())
}

pub async fn run_detail(args: &LoanArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut page: DetailPage<LoanID, Loan> = DetailPage::new();
    let state = page.load(args.id, |id| client.get_loan(id)).await;
    let loan = settled(state, &format!("Loan {}", args.id))?;

    print_loan_detail(loan, client.media(), format);
    Ok(())
}
