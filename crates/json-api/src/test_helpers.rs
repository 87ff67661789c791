//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use otomax_app::{
    context::AppContext,
    domain::{
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        deposits::{
            MockDepositsService,
            records::{DepositRecord, DepositStatus, DepositUuid},
        },
        methods::{
            MockMethodsService,
            records::{FeeType, MethodKind, MethodRecord, MethodStatus, MethodUuid},
        },
        sub_categories::{
            MockSubCategoriesService,
            records::{SubCategoryRecord, SubCategoryStatus, SubCategoryUuid},
        },
        sync::{
            MockSyncService,
            models::{CandidateStatus, MappedCandidate, SyncOptions},
        },
    },
};

use crate::state::State;

fn strict_sync_mock() -> MockSyncService {
    let mut sync = MockSyncService::new();

    sync.expect_run_sync().never();

    sync
}

fn strict_categories_mock() -> MockCategoriesService {
    let mut categories = MockCategoriesService::new();

    categories.expect_resolve_category().never();
    categories.expect_list_categories().never();
    categories.expect_get_category().never();

    categories
}

fn strict_sub_categories_mock() -> MockSubCategoriesService {
    let mut sub_categories = MockSubCategoriesService::new();

    sub_categories.expect_list_sub_categories().never();
    sub_categories.expect_get_sub_category().never();
    sub_categories.expect_create_sub_category().never();
    sub_categories.expect_update_sub_category().never();
    sub_categories.expect_delete_sub_category().never();

    sub_categories
}

fn strict_methods_mock() -> MockMethodsService {
    let mut methods = MockMethodsService::new();

    methods.expect_list_methods().never();
    methods.expect_get_method().never();
    methods.expect_create_method().never();
    methods.expect_update_method().never();
    methods.expect_delete_method().never();

    methods
}

fn strict_deposits_mock() -> MockDepositsService {
    let mut deposits = MockDepositsService::new();

    deposits.expect_create_deposit().never();
    deposits.expect_list_deposits().never();

    deposits
}

/// One mock per service; any call a test did not set up fails it.
struct Mocks {
    sync: MockSyncService,
    categories: MockCategoriesService,
    sub_categories: MockSubCategoriesService,
    methods: MockMethodsService,
    deposits: MockDepositsService,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            sync: strict_sync_mock(),
            categories: strict_categories_mock(),
            sub_categories: strict_sub_categories_mock(),
            methods: strict_methods_mock(),
            deposits: strict_deposits_mock(),
        }
    }
}

impl Mocks {
    fn into_service(self, sync_options: SyncOptions, route: Router) -> Service {
        let app = AppContext {
            sync: Arc::new(self.sync),
            categories: Arc::new(self.categories),
            sub_categories: Arc::new(self.sub_categories),
            methods: Arc::new(self.methods),
            deposits: Arc::new(self.deposits),
        };

        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(app, sync_options)))
                .push(route),
        )
    }
}

pub(crate) fn sync_service(sync: MockSyncService, route: Router) -> Service {
    sync_service_with_options(sync, SyncOptions::default(), route)
}

pub(crate) fn sync_service_with_options(
    sync: MockSyncService,
    options: SyncOptions,
    route: Router,
) -> Service {
    Mocks {
        sync,
        ..Mocks::default()
    }
    .into_service(options, route)
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    Mocks {
        categories,
        ..Mocks::default()
    }
    .into_service(SyncOptions::default(), route)
}

pub(crate) fn sub_categories_service(
    sub_categories: MockSubCategoriesService,
    route: Router,
) -> Service {
    Mocks {
        sub_categories,
        ..Mocks::default()
    }
    .into_service(SyncOptions::default(), route)
}

pub(crate) fn methods_service(methods: MockMethodsService, route: Router) -> Service {
    Mocks {
        methods,
        ..Mocks::default()
    }
    .into_service(SyncOptions::default(), route)
}

pub(crate) fn deposits_service(deposits: MockDepositsService, route: Router) -> Service {
    Mocks {
        deposits,
        ..Mocks::default()
    }
    .into_service(SyncOptions::default(), route)
}

/// A stored Telkomsel candidate costing 10 000 and selling at 11 500.
pub(crate) fn make_candidate(sku: &str) -> MappedCandidate {
    MappedCandidate {
        provider: "digiflazz".to_string(),
        sku_code: sku.to_string(),
        name: format!("Telkomsel 10000 {sku}"),
        category_hint: "Pulsa".to_string(),
        brand: "TELKOMSEL".to_string(),
        item_type: "Umum".to_string(),
        description: String::new(),
        seller_name: "Seller".to_string(),
        cost_price: 10_000,
        selling_price: 11_500,
        profit_margin: 15,
        stock: 10,
        unlimited_stock: false,
        status: CandidateStatus::Active,
        available: true,
        start_cut_off: "0:0".to_string(),
        end_cut_off: "0:0".to_string(),
        supports_multi: true,
        category: Some(CategoryUuid::new()),
        sub_category: None,
    }
}

pub(crate) fn make_sub_category(uuid: SubCategoryUuid) -> SubCategoryRecord {
    SubCategoryRecord {
        uuid,
        category_uuid: CategoryUuid::new(),
        code: "TSEL-REG".to_string(),
        name: "Reguler".to_string(),
        status: SubCategoryStatus::Active,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_deposit(order_id: &str, amount: u32) -> DepositRecord {
    DepositRecord {
        uuid: DepositUuid::new(),
        order_id: order_id.to_string(),
        username: "reseller01".to_string(),
        method: "VC".to_string(),
        payment_reference: Some(format!("REF-{order_id}")),
        payment_url: Some(format!("https://pay.example.com/{order_id}")),
        destination_number: "081234567890".to_string(),
        amount,
        status: DepositStatus::Pending,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_category(uuid: CategoryUuid) -> CategoryRecord {
    CategoryRecord {
        uuid,
        name: "Pulsa".to_string(),
        sub_name: "Telkomsel".to_string(),
        brand: "TELKOMSEL".to_string(),
        code: "pulsa-telkomsel".to_string(),
        status: "active".to_string(),
        thumbnail: String::new(),
        banner: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// An active BCA virtual account accepting 10 000 to 5 000 000.
pub(crate) fn make_method(code: &str) -> MethodRecord {
    MethodRecord {
        uuid: MethodUuid::new(),
        code: code.to_string(),
        name: "BCA Virtual Account".to_string(),
        description: String::new(),
        kind: MethodKind::VirtualAccount,
        image: String::new(),
        min_amount: 10_000,
        max_amount: 5_000_000,
        fee: Some(4_000),
        fee_type: Some(FeeType::Fixed),
        status: MethodStatus::Active,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
