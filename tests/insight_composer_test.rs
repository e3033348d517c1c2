// ==========================================
// InsightComposer 引擎集成测试
// ==========================================
// 测试目标: 验证日报模板的三分支结构与确定性
// ==========================================

use chrono::NaiveDate;
use daily_sales_agent::domain::record::SalesRecord;
use daily_sales_agent::engine::{AnalysisOrchestrator, InsightComposer, PortfolioAggregator, DailyProcessor};
use daily_sales_agent::importer::SalesDataset;

// ==========================================
// 测试辅助函数
// ==========================================

fn create_test_record(
    region: &str,
    delta_vs_target: f64,
    delta_vs_yesterday: f64,
    is_weekend: bool,
) -> SalesRecord {
    let total_sales = 10000.0 * (1.0 + delta_vs_target / 100.0);
    SalesRecord {
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        region: region.to_string(),
        product: "Electronics".to_string(),
        total_sales,
        target_daily: 10000.0,
        delta_vs_target,
        delta_vs_yesterday,
        avg_7d_sales: total_sales,
        day_name: "Friday".to_string(),
        is_weekend,
    }
}

fn compose(records: Vec<SalesRecord>) -> String {
    let evaluated = DailyProcessor::new().process(&SalesDataset::from_records(records));
    let summary = PortfolioAggregator::new().aggregate(&evaluated);
    InsightComposer::new().compose(&summary)
}

// ==========================================
// 测试用例 1: 三分支结构
// ==========================================

#[test]
fn test_critical_branch() {
    println!("\n=== 测试: CRITICAL 分支 ===");

    let insight = compose(vec![
        create_test_record("Jakarta", -20.0, -3.0, false),
        create_test_record("Bandung", 5.0, 2.0, false),
    ]);

    assert!(insight.contains("LAPORAN PENJUALAN HARIAN — Jumat, 2024-03-15"));
    assert!(insight.contains("Portofolio berkinerja jauh di bawah target"));
    assert!(insight.contains("1 masalah kritis memerlukan perhatian segera"));
    assert!(insight.contains("**Status**: 🚨 CRITICAL"));
    // 危急条目携带首条违规文案
    assert!(insight.contains("🚨 **KRITIS**: Jakarta - Electronics: Missed target by 20.0%"));
}

#[test]
fn test_warning_branch() {
    println!("\n=== 测试: WARNING 分支 ===");

    let insight = compose(vec![
        create_test_record("Jakarta", -3.0, -1.0, false),
        create_test_record("Bandung", 5.0, 2.0, false),
    ]);

    assert!(insight.contains("— di bawah ekspektasi"));
    assert!(insight.contains("1 sinyal peringatan terdeteksi, 0 masalah kritis"));
    assert!(insight.contains("**Status**: ⚠️ WARNING"));
    assert!(insight.contains("⚠️ **PERINGATAN**: Jakarta - Electronics: Below target by 3.0%"));
}

#[test]
fn test_ok_branch() {
    println!("\n=== 测试: OK 分支 ===");

    let insight = compose(vec![
        create_test_record("Jakarta", 4.0, 2.0, false),
        create_test_record("Bandung", 2.0, 1.0, false),
    ]);

    assert!(insight.contains("Portofolio berkinerja baik"));
    assert!(insight.contains("✅ Tidak ada masalah kritis atau peringatan terdeteksi"));
    assert!(insight.contains("Strategi saat ini efektif"));
    assert!(insight.contains("**Status**: ✅ OK"));
}

// ==========================================
// 测试用例 2: 金额与百分比格式
// ==========================================

#[test]
fn test_metrics_block_formatting() {
    println!("\n=== 测试: 关键指标区块格式 ===");

    let insight = compose(vec![
        create_test_record("Jakarta", -20.0, -3.0, false), // 销售 8000
        create_test_record("Bandung", 0.0, 0.0, false),    // 销售 10000
    ]);

    // 合计 18000 / 20000 → 90.0%
    assert!(insight.contains("- **Total Penjualan**: Rp 18,000"));
    assert!(insight.contains("- **Target**: Rp 20,000"));
    assert!(insight.contains("- **Selisih vs Target**: -10.0%"));
    assert!(insight.contains("- **Perubahan vs Kemarin**: -1.5%"));
}

#[test]
fn test_trend_word_meningkat_on_positive_delta() {
    let insight = compose(vec![create_test_record("Jakarta", 4.0, 2.5, false)]);
    assert!(insight.contains("Penjualan meningkat 2.5% vs kemarin"));
}

#[test]
fn test_trend_word_menurun_on_negative_delta() {
    let insight = compose(vec![create_test_record("Jakarta", 4.0, -2.5, false)]);
    assert!(insight.contains("Penjualan menurun 2.5% vs kemarin"));
}

// ==========================================
// 测试用例 3: 预警清单的条数上限
// ==========================================

#[test]
fn test_alert_bullet_caps_3_critical_2_warning() {
    println!("\n=== 测试: 预警区块条数上限 (危急3 / 警告2) ===");

    let mut records = Vec::new();
    for i in 0..5 {
        records.push(create_test_record(
            &format!("CritRegion{}", i),
            -20.0 - i as f64,
            0.0,
            false,
        ));
    }
    for i in 0..4 {
        records.push(create_test_record(
            &format!("WarnRegion{}", i),
            -2.0 - i as f64,
            0.0,
            false,
        ));
    }

    let insight = compose(records);

    let critical_bullets = insight.matches("🚨 **KRITIS**").count();
    let warning_bullets = insight.matches("⚠️ **PERINGATAN**").count();
    assert_eq!(critical_bullets, 3);
    assert_eq!(warning_bullets, 2);
}

// ==========================================
// 测试用例 4: 周末降级条目的文案
// ==========================================

#[test]
fn test_weekend_downgraded_item_keeps_critical_message() {
    println!("\n=== 测试: 周末降级条目沿用 CRITICAL 违规文案 ===");

    let insight = compose(vec![create_test_record("Jakarta", -20.0, -3.0, true)]);

    // 整体 WARNING, 条目进入警告清单, 但文案来自首条 (CRITICAL) 违规
    assert!(insight.contains("**Status**: ⚠️ WARNING"));
    assert!(insight.contains("⚠️ **PERINGATAN**: Jakarta - Electronics: Missed target by 20.0%"));
}

// ==========================================
// 测试用例 5: 确定性
// ==========================================

#[test]
fn test_byte_identical_across_runs() {
    println!("\n=== 测试: 相同快照逐字节一致 ===");

    let records = vec![
        create_test_record("Jakarta", -20.0, -3.0, false),
        create_test_record("Bandung", -3.0, -1.0, false),
        create_test_record("Surabaya", 6.0, 2.0, false),
    ];
    let dataset = SalesDataset::from_records(records);
    let orchestrator = AnalysisOrchestrator::new();

    let first = orchestrator.run(&dataset);
    let second = orchestrator.run(&dataset);

    assert_eq!(first.insight, second.insight);
    assert_eq!(
        serde_json::to_string(&first.summary).unwrap(),
        serde_json::to_string(&second.summary).unwrap()
    );
}

#[test]
fn test_day_name_translated_to_indonesian() {
    let mut record = create_test_record("Jakarta", 4.0, 1.0, false);
    record.day_name = "Sunday".to_string();

    let insight = compose(vec![record]);
    assert!(insight.contains("— Minggu, 2024-03-15"));
}
