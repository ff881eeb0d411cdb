use parliament_lib::formatting::{format_currency, format_date, format_term, strip_tags};
use parliament_lib::types::{
    Bill, BillReading, ChatReply, Committee, Document, HotItem, Loan, Mp, NewsArticle, Page,
};
use parliament_lib::parliament_api::Error;
use parliament_lib::MediaResolver;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct BillRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    bill_type: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Mover")]
    #[serde(rename = "Mover")]
    mover: String,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i32,
    #[tabled(rename = "Likes")]
    #[serde(rename = "Likes")]
    likes: u64,
    #[tabled(rename = "Comments")]
    #[serde(rename = "Comments")]
    comments: u64,
    #[tabled(rename = "Shares")]
    #[serde(rename = "Shares")]
    shares: u64,
}

#[derive(Tabled, Serialize)]
struct ReadingRow {
    #[tabled(rename = "Stage")]
    #[serde(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Updated")]
    #[serde(rename = "Updated")]
    updated: String,
    #[tabled(rename = "Document")]
    #[serde(rename = "Document")]
    document: String,
    #[tabled(rename = "Supporting Document")]
    #[serde(rename = "Supporting Document")]
    supporting_document: String,
}

#[derive(Tabled, Serialize)]
struct ArticleRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Author")]
    #[serde(rename = "Author")]
    author: String,
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
}

#[derive(Tabled, Serialize)]
struct MpRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Party")]
    #[serde(rename = "Party")]
    party: String,
    #[tabled(rename = "Constituency")]
    #[serde(rename = "Constituency")]
    constituency: String,
    #[tabled(rename = "District")]
    #[serde(rename = "District")]
    district: String,
}

#[derive(Tabled, Serialize)]
struct CommitteeRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Term")]
    #[serde(rename = "Term")]
    term: String,
    #[tabled(rename = "Chairperson")]
    #[serde(rename = "Chairperson")]
    chairperson: String,
    #[tabled(rename = "Members")]
    #[serde(rename = "Members")]
    members: usize,
}

#[derive(Tabled, Serialize)]
struct LoanRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Approved")]
    #[serde(rename = "Approved")]
    approved: String,
    #[tabled(rename = "Sector")]
    #[serde(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Lender")]
    #[serde(rename = "Lender")]
    lender: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Tabled, Serialize)]
struct DocumentRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

#[derive(Tabled, Serialize)]
struct FieldRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

/// Display form of a resolved media link. Missing files show as `-`;
/// unresolvable values are shown as stored.
fn media_link(resolved: Result<Option<String>, Error>, stored: Option<&str>) -> String {
    match resolved {
        Ok(Some(url)) => url,
        Ok(None) => "-".to_string(),
        Err(e) => {
            tracing::debug!("Cannot resolve media path: {}", e);
            stored.unwrap_or("-").to_string()
        }
    }
}

fn build_bill_rows(bills: &[Bill]) -> Vec<BillRow> {
    bills
        .iter()
        .map(|b| BillRow {
            id: b.id,
            title: b.title.clone(),
            bill_type: b.bill_type.clone(),
            status: b.status.to_string(),
            mover: b.mover.clone(),
            year: b.year,
            likes: b.likes,
            comments: b.comments,
            shares: b.shares,
        })
        .collect()
}

fn build_reading_rows(readings: &[BillReading], media: &MediaResolver) -> Vec<ReadingRow> {
    let mut readings: Vec<&BillReading> = readings.iter().collect();
    readings.sort_by_key(|r| r.stage);
    readings
        .into_iter()
        .map(|r| ReadingRow {
            stage: r.stage.to_string(),
            updated: format_date(r.updated_at.date_naive()),
            document: media_link(r.resolve_document(media), r.document.as_deref()),
            supporting_document: media_link(
                r.resolve_supporting_document(media),
                r.supporting_document.as_deref(),
            ),
        })
        .collect()
}

fn build_article_rows(articles: &[NewsArticle]) -> Vec<ArticleRow> {
    articles
        .iter()
        .map(|a| ArticleRow {
            date: format_date(a.created_at.date_naive()),
            title: a.title.clone(),
            category: a.category.clone(),
            author: a.author.clone(),
            slug: a.slug.clone(),
        })
        .collect()
}

fn build_hot_rows(items: &[HotItem]) -> Vec<ArticleRow> {
    items
        .iter()
        .map(|h| ArticleRow {
            date: format_date(h.created_at.date_naive()),
            title: h.title.clone(),
            category: h.category.clone(),
            author: h.author.clone(),
            slug: h.slug.clone(),
        })
        .collect()
}

fn build_mp_rows(mps: &[Mp]) -> Vec<MpRow> {
    mps.iter()
        .map(|m| MpRow {
            id: m.id,
            name: m.full_name(),
            party: m.party.clone(),
            constituency: m.constituency.clone(),
            district: m.district.clone(),
        })
        .collect()
}

fn build_committee_rows(committees: &[Committee]) -> Vec<CommitteeRow> {
    committees
        .iter()
        .map(|c| CommitteeRow {
            id: c.id,
            name: c.name.clone(),
            term: format_term(c.begin_date, c.end_date),
            chairperson: c
                .chairperson
                .as_ref()
                .map(Mp::full_name)
                .unwrap_or_else(|| "-".to_string()),
            members: c.members.len(),
        })
        .collect()
}

fn build_loan_rows(loans: &[Loan]) -> Vec<LoanRow> {
    loans
        .iter()
        .map(|l| LoanRow {
            id: l.id,
            approved: format_date(l.approval_date),
            sector: l.sector.clone(),
            lender: l.lender.clone(),
            amount: format_currency(l.approved_amount, &l.currency),
        })
        .collect()
}

fn build_document_rows(documents: &[Document], media: &MediaResolver) -> Vec<DocumentRow> {
    documents
        .iter()
        .map(|d| DocumentRow {
            name: d.name.clone(),
            url: media_link(d.resolve_file(media).map(Some), Some(&d.file)),
        })
        .collect()
}

fn field(field: &'static str, value: impl Into<String>) -> FieldRow {
    FieldRow {
        field,
        value: value.into(),
    }
}

fn optional(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}

fn build_bill_fields(bill: &Bill) -> Vec<FieldRow> {
    vec![
        field("Title", bill.title.clone()),
        field("Type", bill.bill_type.clone()),
        field("Status", bill.status.to_string()),
        field("Mover", bill.mover.clone()),
        field("Year", bill.year.to_string()),
        field(
            "Latest Reading",
            bill.latest_reading()
                .map(|r| r.stage.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        field(
            "Engagement",
            format!(
                "{} likes, {} comments, {} shares",
                bill.likes, bill.comments, bill.shares
            ),
        ),
    ]
}

fn build_mp_fields(mp: &Mp, media: &MediaResolver) -> Vec<FieldRow> {
    vec![
        field("Name", mp.full_name()),
        field("Party", mp.party.clone()),
        field("Constituency", mp.constituency.clone()),
        field("District", mp.district.clone()),
        field("Email", optional(mp.email.as_deref())),
        field("Phone", optional(mp.phone.as_deref())),
        field("Photo", media_link(mp.resolve_photo(media), mp.photo.as_deref())),
    ]
}

fn build_committee_fields(committee: &Committee) -> Vec<FieldRow> {
    let name_of = |mp: &Option<Mp>| {
        mp.as_ref()
            .map(Mp::full_name)
            .unwrap_or_else(|| "-".to_string())
    };
    vec![
        field("Name", committee.name.clone()),
        field("Term", format_term(committee.begin_date, committee.end_date)),
        field("Chairperson", name_of(&committee.chairperson)),
        field("Deputy", name_of(&committee.deputy_chairperson)),
    ]
}

fn build_loan_fields(loan: &Loan) -> Vec<FieldRow> {
    vec![
        field("Sector", loan.sector.clone()),
        field("Lender", loan.lender.clone()),
        field(
            "Amount",
            format_currency(loan.approved_amount, &loan.currency),
        ),
        field("Approved", format_date(loan.approval_date)),
    ]
}

// -- Rendering --

fn render<R: Tabled>(rows: Vec<R>, format: &OutputFormat) -> String {
    let mut table = Table::new(rows);
    if let OutputFormat::Markdown = format {
        table.with(Style::markdown());
    }
    table.to_string()
}

fn heading(title: &str, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Markdown => format!("## {}", title),
        _ => title.to_string(),
    }
}

/// One-line paging summary, written to stderr.
pub fn print_page_summary<T>(page: &Page<T>, current: u32, page_size: u32, noun: &str) {
    eprintln!(
        "Page {}/{} ({} total {})",
        current,
        page.total_pages(page_size).max(1),
        page.count,
        noun
    );
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_bills(bills: &[Bill], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&bills),
        _ => println!("{}", render(build_bill_rows(bills), format)),
    }
}

pub fn print_bill_detail(bill: &Bill, media: &MediaResolver, format: &OutputFormat) {
    if let OutputFormat::Json = format {
        print_json(bill);
        return;
    }
    println!("{}", heading(&bill.title, format));
    println!("{}", render(build_bill_fields(bill), format));
    if let Some(description) = &bill.description {
        println!("\n{}", strip_tags(description));
    }
    if !bill.readings.is_empty() {
        println!("\n{}", heading("Readings", format));
        println!("{}", render(build_reading_rows(&bill.readings, media), format));
    }
}

pub fn print_articles(articles: &[NewsArticle], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&articles),
        _ => println!("{}", render(build_article_rows(articles), format)),
    }
}

pub fn print_hot_items(items: &[HotItem], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&items),
        _ => println!("{}", render(build_hot_rows(items), format)),
    }
}

fn story_image(resolved: Result<Option<String>, Error>, stored: Option<&str>) -> Option<String> {
    stored.filter(|s| !s.trim().is_empty())?;
    Some(media_link(resolved, stored))
}

/// Prints a story: title, byline, optional image and link, then the body
/// reduced to plain text.
#[allow(clippy::too_many_arguments)]
fn print_story(
    title: &str,
    author: &str,
    category: &str,
    created: String,
    image: Option<String>,
    link: Option<&str>,
    content: &str,
    format: &OutputFormat,
) {
    println!("{}", heading(title, format));
    println!("{} | {} | {}", created, category, author);
    if let Some(image) = image {
        println!("Image: {}", image);
    }
    if let Some(link) = link.filter(|l| !l.trim().is_empty()) {
        println!("Link: {}", link);
    }
    println!("\n{}", strip_tags(content));
}

pub fn print_article(article: &NewsArticle, media: &MediaResolver, format: &OutputFormat) {
    if let OutputFormat::Json = format {
        print_json(article);
        return;
    }
    print_story(
        &article.title,
        &article.author,
        &article.category,
        format_date(article.created_at.date_naive()),
        story_image(article.resolve_image(media), article.image.as_deref()),
        article.link.as_deref(),
        &article.content,
        format,
    );
}

pub fn print_hot_item(item: &HotItem, media: &MediaResolver, format: &OutputFormat) {
    if let OutputFormat::Json = format {
        print_json(item);
        return;
    }
    print_story(
        &item.title,
        &item.author,
        &item.category,
        format_date(item.created_at.date_naive()),
        story_image(item.resolve_image(media), item.image.as_deref()),
        item.link.as_deref(),
        &item.content,
        format,
    );
}

pub fn print_mps(mps: &[Mp], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&mps),
        _ => println!("{}", render(build_mp_rows(mps), format)),
    }
}

pub fn print_mp_detail(mp: &Mp, media: &MediaResolver, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(mp),
        _ => {
            println!("{}", heading(&mp.full_name(), format));
            println!("{}", render(build_mp_fields(mp, media), format));
        }
    }
}

pub fn print_committees(committees: &[Committee], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&committees),
        _ => println!("{}", render(build_committee_rows(committees), format)),
    }
}

pub fn print_committee_detail(committee: &Committee, media: &MediaResolver, format: &OutputFormat) {
    if let OutputFormat::Json = format {
        print_json(committee);
        return;
    }
    println!("{}", heading(&committee.name, format));
    println!("{}", render(build_committee_fields(committee), format));
    if let Some(description) = &committee.description {
        println!("\n{}", strip_tags(description));
    }
    if !committee.members.is_empty() {
        println!("\n{}", heading("Members", format));
        println!("{}", render(build_mp_rows(&committee.members), format));
    }
    if !committee.documents.is_empty() {
        println!("\n{}", heading("Documents", format));
        println!("{}", render(build_document_rows(&committee.documents, media), format));
    }
}

pub fn print_loans(loans: &[Loan], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&loans),
        _ => println!("{}", render(build_loan_rows(loans), format)),
    }
}

pub fn print_loan_detail(loan: &Loan, media: &MediaResolver, format: &OutputFormat) {
    if let OutputFormat::Json = format {
        print_json(loan);
        return;
    }
    println!("{}", heading(&format!("Loan {}", loan.id), format));
    println!("{}", render(build_loan_fields(loan), format));
    if !loan.description.trim().is_empty() {
        println!("\n{}", strip_tags(&loan.description));
    }
    if !loan.documents.is_empty() {
        println!("\n{}", heading("Documents", format));
        println!("{}", render(build_document_rows(&loan.documents, media), format));
    }
}

/// Chatbot answer plus its source document, when the backend cites one.
pub fn format_chat_reply(reply: &ChatReply, media: &MediaResolver) -> String {
    let mut out = reply.answer.trim().to_string();
    let url = match reply.document_url.as_deref() {
        Some(stored) if !stored.trim().is_empty() => {
            Some(media_link(reply.resolve_document_url(media), Some(stored)))
        }
        _ => None,
    };
    match (reply.document_name.as_deref(), url) {
        (Some(name), Some(url)) => out.push_str(&format!("\n\nSource: {} ({})", name, url)),
        (None, Some(url)) => out.push_str(&format!("\n\nSource: {}", url)),
        (Some(name), None) => out.push_str(&format!("\n\nSource: {}", name)),
        (None, None) => {}
    }
    out
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
