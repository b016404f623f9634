use clap::Args;

#[derive(Debug, Args)]
pub struct CodesArgs {
    /// Code or description to look up.
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    /// Pick suggestion N (0-based) and show the selected record.
    #[arg(long)]
    pub pick: Option<usize>,
    /// CSV source override: HTTP(S) URL or local file path.
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Debug, Args)]
pub struct OrdersArgs {
    /// Document number, description, or vendor text. Empty shows everything.
    #[arg(allow_hyphen_values = true, default_value = "")]
    pub query: String,
    /// Pick suggestion N (0-based); the echoed text refilters the table.
    #[arg(long)]
    pub pick: Option<usize>,
    /// Open row N (0-based) of the filtered table as a detail view.
    #[arg(long)]
    pub detail: Option<usize>,
    /// Copy the composed detail summary to the system clipboard.
    #[arg(long, default_value_t = false, requires = "detail")]
    pub copy: bool,
    /// CSV source override: HTTP(S) URL or local file path.
    #[arg(long)]
    pub source: Option<String>,
}
