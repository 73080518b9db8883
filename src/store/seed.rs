//! Fixed sample records the dashboard is built from.

use crate::models::{
    AiPrediction, Availability, BudgetTrendPoint, CategoryShare, DepartmentSnapshot, Expense,
    ExpenseCategory, ExpenseStatus, ForecastPoint, InventoryLevel, Medicine, MonthlyAmount,
    PredictionKind, ShortageAlert, Supplier, SupplierRecommendation, SupplierShare,
    UsageLogEntry, UsageTrendPoint,
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const PARACETAMOL_HASH: &str =
    "0xd4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3";
const AMOXICILLIN_HASH: &str =
    "0xa1b2c3d4e5f6789012345678901234567890abcdef1234567890abcdef123456";
const INSULIN_HASH: &str = "0x123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef01";
const LISINOPRIL_HASH: &str =
    "0xabcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789ab";
const METFORMIN_HASH: &str = "0x987654321098765432109876543210987654321098765432109876543210987";

/// Department names offered by the usage-log department filter
pub const DEPARTMENTS: [&str; 8] = [
    "Emergency",
    "Pediatrics",
    "Endocrinology",
    "Cardiology",
    "Internal Medicine",
    "Orthopedics",
    "Surgery",
    "ICU",
];

// Literal dates below are all valid, so the fallbacks are never taken.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn medicine(
    id: u32,
    name: &str,
    price: Decimal,
    manufacturer: &str,
    pack_size: &str,
    availability: Availability,
    composition: &str,
    stock: u32,
    provenance_hash: &str,
) -> Medicine {
    Medicine {
        id,
        name: name.into(),
        price,
        manufacturer: manufacturer.into(),
        pack_size: pack_size.into(),
        availability,
        composition: composition.into(),
        stock,
        provenance_hash: provenance_hash.into(),
    }
}

pub fn medicines() -> Vec<Medicine> {
    vec![
        medicine(
            1,
            "Paracetamol 500mg",
            dec!(0.15),
            "GenericPharma",
            "10 tablets",
            Availability::Available,
            "Paracetamol 500mg",
            2500,
            PARACETAMOL_HASH,
        ),
        medicine(
            2,
            "Amoxicillin 250mg",
            dec!(0.75),
            "BioMed Ltd",
            "14 capsules",
            Availability::LowStock,
            "Amoxicillin 250mg",
            150,
            AMOXICILLIN_HASH,
        ),
        medicine(
            3,
            "Insulin Pen",
            dec!(24.99),
            "DiabetesCare",
            "1 pen (3ml)",
            Availability::Critical,
            "Insulin Aspart 100U/ml",
            45,
            INSULIN_HASH,
        ),
        medicine(
            4,
            "Lisinopril 10mg",
            dec!(0.45),
            "CardioMed",
            "30 tablets",
            Availability::Available,
            "Lisinopril 10mg",
            800,
            LISINOPRIL_HASH,
        ),
        medicine(
            5,
            "Metformin 500mg",
            dec!(0.25),
            "DiabetesCare",
            "60 tablets",
            Availability::Available,
            "Metformin HCl 500mg",
            1200,
            METFORMIN_HASH,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn supplier(
    id: u32,
    name: &str,
    rating: f64,
    location: &str,
    trust_score: f64,
    last_contract: NaiveDate,
    specialties: &[&str],
    total_contracts: u32,
    on_time_delivery: f64,
) -> Supplier {
    Supplier {
        id,
        name: name.into(),
        rating,
        location: location.into(),
        trust_score,
        last_contract,
        specialties: strings(specialties),
        total_contracts,
        on_time_delivery,
    }
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        supplier(
            1,
            "MedSupply Corporation",
            4.8,
            "New York, NY",
            98.0,
            date(2024, 1, 15),
            &["Antibiotics", "Pain Management"],
            45,
            96.0,
        ),
        supplier(
            2,
            "Global HealthCorp",
            4.6,
            "Los Angeles, CA",
            95.0,
            date(2024, 1, 10),
            &["Diabetes Care", "Cardiovascular"],
            38,
            94.0,
        ),
        supplier(
            3,
            "PharmaTech Solutions",
            4.2,
            "Chicago, IL",
            87.0,
            date(2023, 12, 20),
            &["Generic Medicines", "Vaccines"],
            22,
            89.0,
        ),
        supplier(
            4,
            "BioMedical Partners",
            4.7,
            "Boston, MA",
            93.0,
            date(2024, 1, 8),
            &["Specialty Drugs", "Oncology"],
            31,
            92.0,
        ),
        supplier(
            5,
            "Unity Pharmaceuticals",
            4.1,
            "Houston, TX",
            82.0,
            date(2023, 11, 30),
            &["Emergency Medicine", "Surgery"],
            18,
            85.0,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn usage(
    id: u32,
    patient_id: &str,
    medicine: &str,
    quantity: u32,
    timestamp: NaiveDateTime,
    department: &str,
    cost: Decimal,
    prescribed_by: &str,
    administered_by: &str,
) -> UsageLogEntry {
    UsageLogEntry {
        id,
        patient_id: patient_id.into(),
        medicine: medicine.into(),
        quantity,
        timestamp,
        department: department.into(),
        cost,
        prescribed_by: prescribed_by.into(),
        administered_by: administered_by.into(),
    }
}

pub fn usage_logs() -> Vec<UsageLogEntry> {
    vec![
        usage(
            1,
            "P-2024-001",
            "Paracetamol 500mg",
            2,
            at(2024, 1, 15, 10, 30),
            "Emergency",
            dec!(0.30),
            "Dr. Smith",
            "Nurse Johnson",
        ),
        usage(
            2,
            "P-2024-002",
            "Amoxicillin 250mg",
            14,
            at(2024, 1, 15, 9, 15),
            "Pediatrics",
            dec!(10.50),
            "Dr. Wilson",
            "Nurse Davis",
        ),
        usage(
            3,
            "P-2024-003",
            "Insulin Pen",
            1,
            at(2024, 1, 15, 8, 45),
            "Endocrinology",
            dec!(24.99),
            "Dr. Brown",
            "Nurse Taylor",
        ),
        usage(
            4,
            "P-2024-004",
            "Lisinopril 10mg",
            30,
            at(2024, 1, 14, 16, 20),
            "Cardiology",
            dec!(13.50),
            "Dr. Anderson",
            "Nurse Wilson",
        ),
        usage(
            5,
            "P-2024-005",
            "Metformin 500mg",
            60,
            at(2024, 1, 14, 14, 10),
            "Internal Medicine",
            dec!(15.00),
            "Dr. Martinez",
            "Nurse Garcia",
        ),
        usage(
            6,
            "P-2024-006",
            "Ibuprofen 200mg",
            20,
            at(2024, 1, 14, 11, 30),
            "Orthopedics",
            dec!(4.00),
            "Dr. Lee",
            "Nurse Brown",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn expense(
    id: u32,
    date: NaiveDate,
    category: ExpenseCategory,
    amount: Decimal,
    description: &str,
    vendor: &str,
    department: &str,
    status: ExpenseStatus,
) -> Expense {
    Expense {
        id,
        date,
        category,
        amount,
        description: description.into(),
        vendor: vendor.into(),
        department: department.into(),
        status,
    }
}

pub fn expenses() -> Vec<Expense> {
    vec![
        expense(
            1,
            date(2024, 1, 15),
            ExpenseCategory::MedicinePurchase,
            dec!(15420.50),
            "Antibiotics and pain medications from MedSupply Corp",
            "MedSupply Corp",
            "Pharmacy",
            ExpenseStatus::Paid,
        ),
        expense(
            2,
            date(2024, 1, 14),
            ExpenseCategory::Equipment,
            dec!(8750.00),
            "Medical devices and monitoring equipment",
            "HealthTech Solutions",
            "ICU",
            ExpenseStatus::Pending,
        ),
        expense(
            3,
            date(2024, 1, 13),
            ExpenseCategory::MedicinePurchase,
            dec!(12300.75),
            "Insulin and diabetes care supplies",
            "DiabetesCare Inc",
            "Endocrinology",
            ExpenseStatus::Paid,
        ),
        expense(
            4,
            date(2024, 1, 12),
            ExpenseCategory::Maintenance,
            dec!(3200.00),
            "Equipment calibration and maintenance",
            "Service Pro",
            "Facilities",
            ExpenseStatus::Paid,
        ),
        expense(
            5,
            date(2024, 1, 11),
            ExpenseCategory::MedicinePurchase,
            dec!(9850.25),
            "Emergency medicine stock replenishment",
            "Global HealthCorp",
            "Emergency",
            ExpenseStatus::Paid,
        ),
    ]
}

pub fn budget_trend() -> Vec<BudgetTrendPoint> {
    [
        ("Jul", dec!(45000), dec!(50000)),
        ("Aug", dec!(52000), dec!(50000)),
        ("Sep", dec!(48000), dec!(50000)),
        ("Oct", dec!(61000), dec!(55000)),
        ("Nov", dec!(55000), dec!(55000)),
        ("Dec", dec!(58000), dec!(55000)),
        ("Jan", dec!(62450), dec!(60000)),
    ]
    .into_iter()
    .map(|(month, amount, budget)| BudgetTrendPoint {
        month: month.into(),
        amount,
        budget,
    })
    .collect()
}

pub fn category_shares() -> Vec<CategoryShare> {
    [
        (ExpenseCategory::MedicinePurchase, 75.0),
        (ExpenseCategory::Equipment, 15.0),
        (ExpenseCategory::Maintenance, 5.0),
        (ExpenseCategory::Staff, 3.0),
        (ExpenseCategory::Other, 2.0),
    ]
    .into_iter()
    .map(|(category, share)| CategoryShare { category, share })
    .collect()
}

fn department(
    name: &str,
    current: u32,
    max: u32,
    consumption: f64,
    critical: &[&str],
) -> DepartmentSnapshot {
    DepartmentSnapshot::new(name, current, max, consumption, strings(critical))
}

pub fn departments() -> Vec<DepartmentSnapshot> {
    vec![
        department(
            "Emergency",
            24,
            30,
            85.0,
            &["Paracetamol", "Morphine", "Adrenaline"],
        ),
        department("ICU", 18, 20, 78.0, &["Insulin", "Sedatives", "Antibiotics"]),
        department("Pediatrics", 12, 25, 45.0, &["Amoxicillin", "Ibuprofen"]),
        department(
            "Cardiology",
            15,
            20,
            62.0,
            &["Lisinopril", "Aspirin", "Statins"],
        ),
        department(
            "Surgery",
            8,
            12,
            92.0,
            &["Anesthetics", "Antibiotics", "Pain Relief"],
        ),
    ]
}

pub fn inventory_levels() -> Vec<InventoryLevel> {
    [
        ("Paracetamol 500mg", 1245, 500, 12.0),
        ("Insulin Pen", 89, 100, 8.0),
        ("Amoxicillin 250mg", 456, 200, 15.0),
        ("Morphine 10mg", 67, 50, 5.0),
        ("Lisinopril 10mg", 234, 150, 7.0),
    ]
    .into_iter()
    .map(
        |(medicine, current_stock, reorder_threshold, consumption_rate)| InventoryLevel {
            medicine: medicine.into(),
            current_stock,
            reorder_threshold,
            consumption_rate,
        },
    )
    .collect()
}

pub fn demand_forecast() -> Vec<ForecastPoint> {
    [
        ("Feb", Some(2400), 2350, 85.0),
        ("Mar", Some(1398), 1450, 78.0),
        ("Apr", Some(9800), 9600, 92.0),
        ("May", Some(3908), 4100, 88.0),
        ("Jun", Some(4800), 4750, 91.0),
        ("Jul", None, 4200, 89.0),
        ("Aug", None, 3800, 86.0),
        ("Sep", None, 4500, 83.0),
    ]
    .into_iter()
    .map(|(month, actual, predicted, confidence)| ForecastPoint {
        month: month.into(),
        actual,
        predicted,
        confidence,
    })
    .collect()
}

pub fn supplier_recommendations() -> Vec<SupplierRecommendation> {
    vec![
        SupplierRecommendation {
            supplier: "MedSupply Corporation".into(),
            score: 96.0,
            reasons: strings(&[
                "98% on-time delivery rate",
                "15% cost reduction potential",
                "High quality ratings (4.8/5)",
                "Strong blockchain verification",
            ]),
            risk_factors: strings(&["Single source dependency"]),
            predicted_savings: dec!(12400),
            confidence: 94.0,
        },
        SupplierRecommendation {
            supplier: "Global HealthCorp".into(),
            score: 91.0,
            reasons: strings(&[
                "Diverse product portfolio",
                "Competitive pricing model",
                "Strong regulatory compliance",
                "AI-optimized logistics",
            ]),
            risk_factors: strings(&["Higher shipping costs", "Longer lead times"]),
            predicted_savings: dec!(8750),
            confidence: 87.0,
        },
        SupplierRecommendation {
            supplier: "BioMedical Partners".into(),
            score: 88.0,
            reasons: strings(&[
                "Specialized expertise",
                "Innovation partnership potential",
                "Excellent quality control",
                "Transparent blockchain tracking",
            ]),
            risk_factors: strings(&["Premium pricing", "Limited capacity"]),
            predicted_savings: dec!(5200),
            confidence: 82.0,
        },
    ]
}

pub fn ai_predictions() -> Vec<AiPrediction> {
    vec![
        AiPrediction {
            id: 1,
            kind: PredictionKind::DemandSurge,
            medicine: "Paracetamol 500mg".into(),
            prediction: "40% increase expected in next 2 weeks".into(),
            confidence: 89.0,
            action: "Recommend increasing stock by 500 units".into(),
            provenance_hash: PARACETAMOL_HASH.into(),
        },
        AiPrediction {
            id: 2,
            kind: PredictionKind::SupplyRisk,
            medicine: "Insulin Pen".into(),
            prediction: "Potential shortage from supplier delays".into(),
            confidence: 76.0,
            action: "Contact alternative suppliers immediately".into(),
            provenance_hash: AMOXICILLIN_HASH.into(),
        },
        AiPrediction {
            id: 3,
            kind: PredictionKind::CostOptimization,
            medicine: "Amoxicillin 250mg".into(),
            prediction: "Price drop anticipated next month".into(),
            confidence: 84.0,
            action: "Delay large orders until price reduction".into(),
            provenance_hash: INSULIN_HASH.into(),
        },
    ]
}

pub fn usage_trend() -> Vec<UsageTrendPoint> {
    [
        ("Jan", 2400, 2200),
        ("Feb", 1398, 1500),
        ("Mar", 9800, 9500),
        ("Apr", 3908, 4000),
        ("May", 4800, 4900),
        ("Jun", 3800, 3700),
    ]
    .into_iter()
    .map(|(month, usage, prediction)| UsageTrendPoint {
        month: month.into(),
        usage,
        prediction,
    })
    .collect()
}

pub fn supplier_shares() -> Vec<SupplierShare> {
    [
        ("MedSupply Co", 30.0),
        ("HealthCorp", 25.0),
        ("PharmaTech", 20.0),
        ("MediDist", 15.0),
        ("Others", 10.0),
    ]
    .into_iter()
    .map(|(supplier, share)| SupplierShare {
        supplier: supplier.into(),
        share,
    })
    .collect()
}

pub fn monthly_expenses() -> Vec<MonthlyAmount> {
    [
        ("Jan", dec!(45000)),
        ("Feb", dec!(52000)),
        ("Mar", dec!(48000)),
        ("Apr", dec!(61000)),
        ("May", dec!(55000)),
        ("Jun", dec!(58000)),
    ]
    .into_iter()
    .map(|(month, amount)| MonthlyAmount {
        month: month.into(),
        amount,
    })
    .collect()
}

pub fn shortage_alerts() -> Vec<ShortageAlert> {
    [
        ("Paracetamol 500mg", 45, 100),
        ("Amoxicillin 250mg", 78, 150),
        ("Insulin Pen", 12, 50),
    ]
    .into_iter()
    .map(|(medicine, current, threshold)| ShortageAlert {
        medicine: medicine.into(),
        current,
        threshold,
    })
    .collect()
}
