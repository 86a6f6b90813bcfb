//! The closed page catalog.
//!
//! Every navigable screen in the application is one `PageKind` variant.
//! Consumers (icon lookup, label lookup, route synthesis) match on the enum
//! exhaustively, so adding a page kind is a compile-time-enforced checklist
//! rather than a silent runtime gap.

use serde::{Deserialize, Serialize};

/// A domain entity family with list/detail/new/edit screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityFamily {
    Client,
    Deal,
    Mission,
    Invoice,
    Proposal,
    Supplier,
    Expense,
}

impl EntityFamily {
    /// URL segment for this family's routes, e.g. `/clients/...`
    pub fn route_segment(&self) -> &'static str {
        match self {
            EntityFamily::Client => "clients",
            EntityFamily::Deal => "deals",
            EntityFamily::Mission => "missions",
            EntityFamily::Invoice => "invoices",
            EntityFamily::Proposal => "proposals",
            EntityFamily::Supplier => "suppliers",
            EntityFamily::Expense => "expenses",
        }
    }

    /// Resolve a URL segment back to a family, `None` for unknown segments.
    pub fn from_route_segment(segment: &str) -> Option<Self> {
        match segment {
            "clients" => Some(EntityFamily::Client),
            "deals" => Some(EntityFamily::Deal),
            "missions" => Some(EntityFamily::Mission),
            "invoices" => Some(EntityFamily::Invoice),
            "proposals" => Some(EntityFamily::Proposal),
            "suppliers" => Some(EntityFamily::Supplier),
            "expenses" => Some(EntityFamily::Expense),
            _ => None,
        }
    }

    /// Singular display name, e.g. "Client"
    pub fn singular(&self) -> &'static str {
        match self {
            EntityFamily::Client => "Client",
            EntityFamily::Deal => "Deal",
            EntityFamily::Mission => "Mission",
            EntityFamily::Invoice => "Invoice",
            EntityFamily::Proposal => "Proposal",
            EntityFamily::Supplier => "Supplier",
            EntityFamily::Expense => "Expense",
        }
    }

    /// Plural display name, e.g. "Clients" (used for list screens)
    pub fn plural(&self) -> &'static str {
        match self {
            EntityFamily::Client => "Clients",
            EntityFamily::Deal => "Deals",
            EntityFamily::Mission => "Missions",
            EntityFamily::Invoice => "Invoices",
            EntityFamily::Proposal => "Proposals",
            EntityFamily::Supplier => "Suppliers",
            EntityFamily::Expense => "Expenses",
        }
    }

    /// All families, for UI iteration (sidebar, command palette)
    pub fn all() -> &'static [EntityFamily] {
        &[
            EntityFamily::Client,
            EntityFamily::Deal,
            EntityFamily::Mission,
            EntityFamily::Invoice,
            EntityFamily::Proposal,
            EntityFamily::Supplier,
            EntityFamily::Expense,
        ]
    }
}

/// The kind of screen a tab shows.
///
/// One variant per page category: the dashboard plus list, detail, creation
/// and edit screens for each entity family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// The home dashboard (the permanent tab)
    Dashboard,

    ClientList,
    ClientDetail,
    ClientNew,
    ClientEdit,

    DealList,
    DealDetail,
    DealNew,
    DealEdit,

    MissionList,
    MissionDetail,
    MissionNew,
    MissionEdit,

    InvoiceList,
    InvoiceDetail,
    InvoiceNew,
    InvoiceEdit,

    ProposalList,
    ProposalDetail,
    ProposalNew,
    ProposalEdit,

    SupplierList,
    SupplierDetail,
    SupplierNew,
    SupplierEdit,

    ExpenseList,
    ExpenseDetail,
    ExpenseNew,
    ExpenseEdit,
}

impl PageKind {
    /// The entity family this page belongs to, `None` for the dashboard.
    pub fn family(&self) -> Option<EntityFamily> {
        match self {
            PageKind::Dashboard => None,
            PageKind::ClientList
            | PageKind::ClientDetail
            | PageKind::ClientNew
            | PageKind::ClientEdit => Some(EntityFamily::Client),
            PageKind::DealList | PageKind::DealDetail | PageKind::DealNew | PageKind::DealEdit => {
                Some(EntityFamily::Deal)
            }
            PageKind::MissionList
            | PageKind::MissionDetail
            | PageKind::MissionNew
            | PageKind::MissionEdit => Some(EntityFamily::Mission),
            PageKind::InvoiceList
            | PageKind::InvoiceDetail
            | PageKind::InvoiceNew
            | PageKind::InvoiceEdit => Some(EntityFamily::Invoice),
            PageKind::ProposalList
            | PageKind::ProposalDetail
            | PageKind::ProposalNew
            | PageKind::ProposalEdit => Some(EntityFamily::Proposal),
            PageKind::SupplierList
            | PageKind::SupplierDetail
            | PageKind::SupplierNew
            | PageKind::SupplierEdit => Some(EntityFamily::Supplier),
            PageKind::ExpenseList
            | PageKind::ExpenseDetail
            | PageKind::ExpenseNew
            | PageKind::ExpenseEdit => Some(EntityFamily::Expense),
        }
    }

    /// Icon identifier for the tab strip and command palette.
    pub fn icon(&self) -> &'static str {
        match self {
            PageKind::Dashboard => "layout-dashboard",
            PageKind::ClientList
            | PageKind::ClientDetail
            | PageKind::ClientNew
            | PageKind::ClientEdit => "users",
            PageKind::DealList | PageKind::DealDetail | PageKind::DealNew | PageKind::DealEdit => {
                "handshake"
            }
            PageKind::MissionList
            | PageKind::MissionDetail
            | PageKind::MissionNew
            | PageKind::MissionEdit => "target",
            PageKind::InvoiceList
            | PageKind::InvoiceDetail
            | PageKind::InvoiceNew
            | PageKind::InvoiceEdit => "receipt",
            PageKind::ProposalList
            | PageKind::ProposalDetail
            | PageKind::ProposalNew
            | PageKind::ProposalEdit => "file-text",
            PageKind::SupplierList
            | PageKind::SupplierDetail
            | PageKind::SupplierNew
            | PageKind::SupplierEdit => "truck",
            PageKind::ExpenseList
            | PageKind::ExpenseDetail
            | PageKind::ExpenseNew
            | PageKind::ExpenseEdit => "credit-card",
        }
    }

    /// Default display label, used until an entity's real name loads.
    pub fn label(&self) -> String {
        match self {
            PageKind::Dashboard => "Dashboard".to_string(),
            PageKind::ClientList => EntityFamily::Client.plural().to_string(),
            PageKind::ClientDetail => EntityFamily::Client.singular().to_string(),
            PageKind::ClientNew => format!("New {}", EntityFamily::Client.singular()),
            PageKind::ClientEdit => format!("Edit {}", EntityFamily::Client.singular()),
            PageKind::DealList => EntityFamily::Deal.plural().to_string(),
            PageKind::DealDetail => EntityFamily::Deal.singular().to_string(),
            PageKind::DealNew => format!("New {}", EntityFamily::Deal.singular()),
            PageKind::DealEdit => format!("Edit {}", EntityFamily::Deal.singular()),
            PageKind::MissionList => EntityFamily::Mission.plural().to_string(),
            PageKind::MissionDetail => EntityFamily::Mission.singular().to_string(),
            PageKind::MissionNew => format!("New {}", EntityFamily::Mission.singular()),
            PageKind::MissionEdit => format!("Edit {}", EntityFamily::Mission.singular()),
            PageKind::InvoiceList => EntityFamily::Invoice.plural().to_string(),
            PageKind::InvoiceDetail => EntityFamily::Invoice.singular().to_string(),
            PageKind::InvoiceNew => format!("New {}", EntityFamily::Invoice.singular()),
            PageKind::InvoiceEdit => format!("Edit {}", EntityFamily::Invoice.singular()),
            PageKind::ProposalList => EntityFamily::Proposal.plural().to_string(),
            PageKind::ProposalDetail => EntityFamily::Proposal.singular().to_string(),
            PageKind::ProposalNew => format!("New {}", EntityFamily::Proposal.singular()),
            PageKind::ProposalEdit => format!("Edit {}", EntityFamily::Proposal.singular()),
            PageKind::SupplierList => EntityFamily::Supplier.plural().to_string(),
            PageKind::SupplierDetail => EntityFamily::Supplier.singular().to_string(),
            PageKind::SupplierNew => format!("New {}", EntityFamily::Supplier.singular()),
            PageKind::SupplierEdit => format!("Edit {}", EntityFamily::Supplier.singular()),
            PageKind::ExpenseList => EntityFamily::Expense.plural().to_string(),
            PageKind::ExpenseDetail => EntityFamily::Expense.singular().to_string(),
            PageKind::ExpenseNew => format!("New {}", EntityFamily::Expense.singular()),
            PageKind::ExpenseEdit => format!("Edit {}", EntityFamily::Expense.singular()),
        }
    }

    /// Whether tabs of this kind reference a specific domain record.
    ///
    /// Detail and edit screens carry an `entity_id`; list, creation and
    /// dashboard screens do not.
    pub fn requires_entity_id(&self) -> bool {
        match self {
            PageKind::ClientDetail
            | PageKind::ClientEdit
            | PageKind::DealDetail
            | PageKind::DealEdit
            | PageKind::MissionDetail
            | PageKind::MissionEdit
            | PageKind::InvoiceDetail
            | PageKind::InvoiceEdit
            | PageKind::ProposalDetail
            | PageKind::ProposalEdit
            | PageKind::SupplierDetail
            | PageKind::SupplierEdit
            | PageKind::ExpenseDetail
            | PageKind::ExpenseEdit => true,
            PageKind::Dashboard
            | PageKind::ClientList
            | PageKind::ClientNew
            | PageKind::DealList
            | PageKind::DealNew
            | PageKind::MissionList
            | PageKind::MissionNew
            | PageKind::InvoiceList
            | PageKind::InvoiceNew
            | PageKind::ProposalList
            | PageKind::ProposalNew
            | PageKind::SupplierList
            | PageKind::SupplierNew
            | PageKind::ExpenseList
            | PageKind::ExpenseNew => false,
        }
    }

    /// The list screen for a family.
    pub fn list_of(family: EntityFamily) -> Self {
        match family {
            EntityFamily::Client => PageKind::ClientList,
            EntityFamily::Deal => PageKind::DealList,
            EntityFamily::Mission => PageKind::MissionList,
            EntityFamily::Invoice => PageKind::InvoiceList,
            EntityFamily::Proposal => PageKind::ProposalList,
            EntityFamily::Supplier => PageKind::SupplierList,
            EntityFamily::Expense => PageKind::ExpenseList,
        }
    }

    /// The detail screen for a family.
    pub fn detail_of(family: EntityFamily) -> Self {
        match family {
            EntityFamily::Client => PageKind::ClientDetail,
            EntityFamily::Deal => PageKind::DealDetail,
            EntityFamily::Mission => PageKind::MissionDetail,
            EntityFamily::Invoice => PageKind::InvoiceDetail,
            EntityFamily::Proposal => PageKind::ProposalDetail,
            EntityFamily::Supplier => PageKind::SupplierDetail,
            EntityFamily::Expense => PageKind::ExpenseDetail,
        }
    }

    /// The creation screen for a family.
    pub fn new_of(family: EntityFamily) -> Self {
        match family {
            EntityFamily::Client => PageKind::ClientNew,
            EntityFamily::Deal => PageKind::DealNew,
            EntityFamily::Mission => PageKind::MissionNew,
            EntityFamily::Invoice => PageKind::InvoiceNew,
            EntityFamily::Proposal => PageKind::ProposalNew,
            EntityFamily::Supplier => PageKind::SupplierNew,
            EntityFamily::Expense => PageKind::ExpenseNew,
        }
    }

    /// The edit screen for a family.
    pub fn edit_of(family: EntityFamily) -> Self {
        match family {
            EntityFamily::Client => PageKind::ClientEdit,
            EntityFamily::Deal => PageKind::DealEdit,
            EntityFamily::Mission => PageKind::MissionEdit,
            EntityFamily::Invoice => PageKind::InvoiceEdit,
            EntityFamily::Proposal => PageKind::ProposalEdit,
            EntityFamily::Supplier => PageKind::SupplierEdit,
            EntityFamily::Expense => PageKind::ExpenseEdit,
        }
    }
}
