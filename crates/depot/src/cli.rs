//! The clap command tree for `depot`.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// depot -- command-line console for the logistics back-office
#[derive(Debug, Parser)]
#[command(
    name = "depot",
    version,
    about = "Manage logistics master data from the command line",
    long_about = "Administer the logistics back-office: list, search, create,\n\
        edit, and delete products, customers, and storage locations, and\n\
        view the landing dashboard summary.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Named backend profile from the config file
    #[arg(long, short = 'p', env = "DEPOT_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Back-office root URL; wins over any profile
    #[arg(long, short = 'u', env = "DEPOT_API_URL", global = true)]
    pub api_url: Option<String>,

    /// How to render results
    #[arg(
        long,
        short = 'o',
        env = "DEPOT_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// ANSI color behavior
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// More log detail per repetition (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "DEPOT_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage products
    #[command(alias = "prod", alias = "p")]
    Products {
        #[command(subcommand)]
        command: ProductsCommand,
    },

    /// Manage customers
    #[command(alias = "cust", alias = "c")]
    Customers {
        #[command(subcommand)]
        command: CustomersCommand,
    },

    /// Manage storage locations
    #[command(alias = "loc", alias = "l")]
    Locations {
        #[command(subcommand)]
        command: LocationsCommand,
    },

    /// Show the landing dashboard summary
    #[command(alias = "dash")]
    Dashboard,

    /// Probe the back-office health endpoint
    Health,
}

// ── Products ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products (server-paged)
    #[command(alias = "ls")]
    List(ProductListArgs),

    /// Get product details
    Get {
        /// Product ID
        id: String,
    },

    /// Search products by name
    Search {
        /// Name substring
        name: String,
    },

    /// Create a product
    Create {
        /// Product ID (client-supplied, immutable)
        #[arg(long)]
        id: String,

        /// Product name
        #[arg(long)]
        name: String,

        /// Specification (free text)
        #[arg(long)]
        specification: Option<String>,

        /// Unit of measure (e.g. "pcs")
        #[arg(long)]
        unit: String,

        /// Safety stock level
        #[arg(long)]
        safety_stock: i64,
    },

    /// Update a product (unset flags keep their current values)
    Update {
        /// Product ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        specification: Option<String>,

        #[arg(long)]
        unit: Option<String>,

        #[arg(long)]
        safety_stock: Option<i64>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product ID
        id: String,
    },
}

/// Pagination and filtering for the paged product listing.
#[derive(Debug, Args)]
pub struct ProductListArgs {
    /// Zero-based page index
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Page size
    #[arg(long, short = 's', default_value = "10")]
    pub size: u32,

    /// Sort field
    #[arg(long, default_value = "createdAt")]
    pub sort_by: String,

    /// Sort direction
    #[arg(long, default_value = "desc")]
    pub sort_dir: SortDirArg,

    /// Filter by name keyword
    #[arg(long, short = 'k')]
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortDirArg {
    Asc,
    Desc,
}

// ── Customers ───────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List all customers
    #[command(alias = "ls")]
    List,

    /// Get customer details
    Get {
        /// Customer ID
        id: String,
    },

    /// Search customers by name
    Search {
        /// Name substring
        name: String,
    },

    /// Create a customer
    Create {
        /// Customer ID (client-supplied, immutable)
        #[arg(long)]
        id: String,

        /// Customer name
        #[arg(long)]
        name: String,

        /// Postal address
        #[arg(long)]
        address: String,

        /// Phone number
        #[arg(long)]
        phone: String,
    },

    /// Update a customer (unset flags keep their current values)
    Update {
        /// Customer ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a customer
    #[command(alias = "rm")]
    Delete {
        /// Customer ID
        id: String,
    },
}

// ── Locations ───────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum LocationsCommand {
    /// List all storage locations
    #[command(alias = "ls")]
    List,

    /// Get location details
    Get {
        /// Location ID
        id: String,
    },

    /// Search locations by warehouse code
    Search {
        /// Warehouse code
        warehouse_code: String,
    },

    /// Create a storage location
    Create {
        /// Location ID (client-supplied, immutable)
        #[arg(long)]
        id: String,

        /// Warehouse code (e.g. "WH-01")
        #[arg(long)]
        warehouse_code: String,

        /// Zone within the warehouse
        #[arg(long)]
        zone: String,

        /// Rack identifier
        #[arg(long)]
        rack: String,

        /// Shelf level
        #[arg(long)]
        level_no: String,

        /// Position on the shelf
        #[arg(long)]
        position: String,

        /// Maximum capacity
        #[arg(long)]
        max_capacity: i64,
    },

    /// Update a location (unset flags keep their current values)
    Update {
        /// Location ID
        id: String,

        #[arg(long)]
        warehouse_code: Option<String>,

        #[arg(long)]
        zone: Option<String>,

        #[arg(long)]
        rack: Option<String>,

        #[arg(long)]
        level_no: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        max_capacity: Option<i64>,
    },

    /// Delete a storage location
    #[command(alias = "rm")]
    Delete {
        /// Location ID
        id: String,
    },
}

// ── Output & color enums ────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table for humans (the default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// One identifier per line, for scripting
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}
