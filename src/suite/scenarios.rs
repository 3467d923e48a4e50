//! Canonical scenario definitions
//!
//! Each scenario is a declarative request spec plus the fixture payloads it
//! sends. The fixtures mirror the account manager's nested account shape:
//! boss counts per tier, special bosses, materials broken down by rarity,
//! craft resources and items, and the character info block.

use serde_json::{json, Value};

use crate::http::RequestSpec;

/// Fields every pricing configuration response must carry
pub const BOSS_PRICE_FIELDS: &[&str] = &[
    "medio2_price",
    "grande2_price",
    "medio4_price",
    "grande4_price",
    "medio6_price",
    "grande6_price",
    "medio7_price",
    "grande7_price",
    "medio8_price",
    "grande8_price",
    "xama_price",
    "praca_4f_price",
    "cracha_epica_price",
    "gold_price",
];

/// Top-level fields every echoed account must carry
pub const ACCOUNT_FIELDS: &[&str] = &[
    "name",
    "bosses",
    "special_bosses",
    "materials",
    "craft_resources",
    "account_info",
];

/// Scenario names in execution order
pub const SCENARIO_NAMES: &[&str] = &[
    "API Root",
    "Get Boss Prices",
    "Update Boss Prices",
    "Get Accounts",
    "Create Account",
    "Get Specific Account",
    "Update Account",
    "Delete Account",
];

pub fn root_probe() -> RequestSpec {
    RequestSpec::get("", 200)
}

pub fn get_boss_prices() -> RequestSpec {
    RequestSpec::get("boss-prices", 200)
}

/// Sparse pricing patch; the echo must carry these values exactly
pub fn boss_price_patch() -> Value {
    json!({
        "medio2_price": 0.05,
        "grande2_price": 0.10,
        "gold_price": 0.001
    })
}

pub fn update_boss_prices() -> RequestSpec {
    RequestSpec::put("boss-prices", 200, boss_price_patch())
}

pub fn list_accounts() -> RequestSpec {
    RequestSpec::get("accounts", 200)
}

/// A fully populated account, every nested block filled in
pub fn new_account_payload() -> Value {
    json!({
        "name": "Teste Account",
        "bosses": {
            "medio2": 10, "grande2": 5, "medio4": 8, "grande4": 3,
            "medio6": 2, "grande6": 1, "medio7": 0, "grande7": 0,
            "medio8": 0, "grande8": 0
        },
        "sala_pico": "5F",
        "special_bosses": {
            "xama": 1, "praca_4f": 0, "cracha_epica": 0
        },
        "materials": {
            "aco": {"raro": 10, "epico": 5, "lendario": 2},
            "esfera": {"raro": 8, "epico": 3, "lendario": 1},
            "lunar": {"raro": 12, "epico": 4, "lendario": 0},
            "quintessencia": {"raro": 0, "epico": 0, "lendario": 0},
            "bugiganga": {"raro": 0, "epico": 0, "lendario": 0},
            "platina": {"raro": 0, "epico": 0, "lendario": 0},
            "iluminado": {"raro": 0, "epico": 0, "lendario": 0},
            "anima": {"raro": 0, "epico": 0, "lendario": 0}
        },
        "craft_resources": {
            "po": 1000, "ds": 5000, "cobre": 50000
        },
        "craft_items": ["garra", "escama"],
        "account_info": {
            "level": 85, "power": 1500000,
            "praca": "6F", "praca_atq": "5F", "pico": "7F",
            "raid": "Mina Demoníaca", "raid_boss": "Rei do Touro"
        },
        "gold": 125000.50
    })
}

pub fn create_account() -> RequestSpec {
    RequestSpec::post("accounts", 200, new_account_payload())
}

pub fn get_account(id: &str) -> RequestSpec {
    RequestSpec::get(format!("accounts/{id}"), 200)
}

/// Partial update: two top-level fields and a nested account_info patch
pub fn account_patch() -> Value {
    json!({
        "name": "Updated Test Account",
        "gold": 200000.75,
        "account_info": {
            "power": 2000000,
            "level": 90
        }
    })
}

pub fn update_account(id: &str) -> RequestSpec {
    RequestSpec::put(format!("accounts/{id}"), 200, account_patch())
}

pub fn delete_account(id: &str) -> RequestSpec {
    RequestSpec::delete(format!("accounts/{id}"), 200)
}

/// Follow-up probe confirming deletion; not-found is the pass condition
pub fn verify_deleted(id: &str) -> RequestSpec {
    RequestSpec::get(format!("accounts/{id}"), 404)
}
