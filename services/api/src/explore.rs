use crate::infra::load_labels;
use candidate_explorer::config::AppConfig;
use candidate_explorer::error::AppError;
use candidate_explorer::explorer::{
    CandidateDetail, CandidateId, DatasetStore, ExplorerRequest, ExplorerService, ExplorerView,
    LoadState, OptionEntry,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DatasetArgs {
    /// Candidate dataset (JSON or CSV). Defaults to EXPLORER_DATASET_PATH.
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Additional Nepali to English label tables (JSON).
    #[arg(long)]
    pub(crate) labels: Option<PathBuf>,
    /// Display language: ne or en.
    #[arg(long)]
    pub(crate) language: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ExploreArgs {
    #[command(flatten)]
    pub(crate) source: DatasetArgs,
    #[arg(long)]
    pub(crate) province: Option<String>,
    #[arg(long)]
    pub(crate) district: Option<String>,
    /// Constituency number within the district.
    #[arg(long)]
    pub(crate) area: Option<String>,
    #[arg(long)]
    pub(crate) party: Option<String>,
    #[arg(long)]
    pub(crate) gender: Option<String>,
    /// One of postgraduate, bachelors, intermediate, secondary, below_secondary, literate, other.
    #[arg(long)]
    pub(crate) qualification: Option<String>,
    #[arg(long)]
    pub(crate) min_age: Option<u32>,
    #[arg(long)]
    pub(crate) max_age: Option<u32>,
    /// Case-insensitive match on name or party, in either language.
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// One of education_age, age_asc, age_desc, name, party.
    #[arg(long)]
    pub(crate) sort: Option<String>,
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    /// Candidate ids to compare side by side (at most three are kept).
    #[arg(long, num_args = 1..)]
    pub(crate) compare: Vec<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct CandidateArgs {
    /// Candidate id as published in the dataset
    pub(crate) id: u64,
    #[command(flatten)]
    pub(crate) source: DatasetArgs,
}

impl ExploreArgs {
    fn request(&self) -> ExplorerRequest {
        ExplorerRequest {
            province: self.province.clone(),
            district: self.district.clone(),
            area: self.area.clone(),
            party: self.party.clone(),
            gender: self.gender.clone(),
            qualification: self.qualification.clone(),
            min_age: self.min_age,
            max_age: self.max_age,
            search: self.search.clone(),
            sort: self.sort.clone(),
            page: Some(self.page),
            compare: self.compare.clone(),
            language: self.source.language.clone(),
        }
    }
}

fn open_service(source: &DatasetArgs) -> Result<ExplorerService, AppError> {
    let mut config = AppConfig::load()?.explorer;
    if let Some(dataset) = &source.dataset {
        config.dataset_path = dataset.clone();
    }
    if let Some(labels) = &source.labels {
        config.labels_path = Some(labels.clone());
    }

    let labels = load_labels(&config)?;
    let store = DatasetStore::from_path(&config.dataset_path)?;
    Ok(ExplorerService::with_store(store, labels, config))
}

pub(crate) fn run_explore(args: ExploreArgs) -> Result<(), AppError> {
    let service = open_service(&args.source)?;
    let view = service.view(&args.request());
    render_view(&view);
    Ok(())
}

pub(crate) fn run_candidate(args: CandidateArgs) -> Result<(), AppError> {
    let service = open_service(&args.source)?;
    match service.candidate(CandidateId(args.id), args.source.language.as_deref()) {
        Some(detail) => render_detail(&detail),
        None => println!("Candidate {} not found", args.id),
    }
    Ok(())
}

fn render_view(view: &ExplorerView) {
    println!("Candidate explorer");
    if let LoadState::Failed { reason } = &view.load_state {
        println!("Dataset unavailable: {}", reason);
        return;
    }

    let selection = &view.selection;
    println!(
        "Province {} | district {} | area {} | age {}-{} | sort {}",
        selection.province,
        selection.district.as_deref().unwrap_or("all"),
        selection.area.as_deref().unwrap_or("all"),
        selection.age.min,
        selection.age.max,
        selection.sort.code()
    );

    println!("\nFilter options");
    print_options("Districts", &view.options.districts);
    print_options("Areas", &view.options.areas);
    print_options("Parties", &view.options.parties);
    print_options("Genders", &view.options.genders);

    let summary = &view.summary;
    println!("\nMatching candidates: {}", summary.total);

    println!("\nBy party");
    for entry in &summary.by_party {
        println!("- {}: {}", entry.party_label, entry.count);
    }

    println!("\nBy qualification");
    for entry in &summary.by_qualification {
        println!("- {}: {}", entry.tier_label, entry.count);
    }

    println!("\nBy gender");
    for entry in &summary.by_gender {
        println!(
            "- {}: {} ({}%)",
            entry.gender_label, entry.count, entry.percentage
        );
    }

    println!("\nBy age");
    for entry in &summary.by_age_bracket {
        let names: Vec<&str> = entry.members.iter().map(|m| m.name.as_str()).collect();
        if names.is_empty() {
            println!("- {}: 0", entry.bracket_label);
        } else {
            println!(
                "- {}: {} ({})",
                entry.bracket_label,
                entry.count,
                names.join(", ")
            );
        }
    }

    let page = &view.results;
    println!(
        "\nResults page {}/{} ({} candidates)",
        page.current_page, page.total_pages, page.total_items
    );
    if page.items.is_empty() {
        println!("No candidates on this page");
    }
    for card in &page.items {
        println!(
            "- [{}] {} | {} | {} {} | age {} | {} | {}",
            card.id,
            card.name,
            card.party,
            card.district,
            card.area,
            card.age,
            card.gender,
            card.tier_label
        );
    }

    if view.comparison.is_empty() {
        println!("\nComparison: none selected");
    } else {
        println!("\nComparison");
        for detail in &view.comparison {
            render_detail(detail);
        }
        if view.compare_full {
            println!("(comparison is full)");
        }
    }
}

fn print_options(title: &str, entries: &[OptionEntry]) {
    let labels: Vec<&str> = entries.iter().map(|entry| entry.label.as_str()).collect();
    println!("{}: {}", title, labels.join(", "));
}

fn render_detail(detail: &CandidateDetail) {
    let card = &detail.card;
    println!("\n{} (#{})", card.name, card.id);
    println!("Party: {}", card.party);
    println!("Symbol: {}", detail.symbol.as_deref().unwrap_or("-"));
    println!(
        "Constituency: {} {}, {}",
        card.district, card.area, card.province
    );
    println!("Age: {} | Gender: {}", card.age, card.gender);
    println!(
        "Qualification: {} ({})",
        detail.qualification.as_deref().unwrap_or("-"),
        card.tier_label
    );
    println!(
        "Institution: {}",
        detail.institution.as_deref().unwrap_or("-")
    );
    println!("Father: {}", detail.father_name.as_deref().unwrap_or("-"));
    println!("Spouse: {}", detail.spouse_name.as_deref().unwrap_or("-"));
    println!("Address: {}", detail.address.as_deref().unwrap_or("-"));
    println!("Experience: {}", detail.experience.as_deref().unwrap_or("-"));
    println!(
        "Other details: {}",
        detail.other_details.as_deref().unwrap_or("-")
    );
    println!("Photo: {}", card.image_url);
}
