// ==========================================
// 销售日报监控系统 - 测试数据生成器
// ==========================================
// 用途: 生成多日 / 多地区 / 多产品的确定性样例 CSV
// 运行: cargo run --bin generate_test_data [输出路径]
// ==========================================

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::error::Error;

const REGIONS: [&str; 3] = ["Jakarta", "Bandung", "Surabaya"];
const PRODUCTS: [&str; 2] = ["Electronics", "Clothing"];
const DAYS: i64 = 10;

fn main() -> Result<(), Box<dyn Error>> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/daily_sales_sample.csv".to_string());

    let start = NaiveDate::from_ymd_opt(2024, 3, 6).expect("固定起始日期");

    let mut writer = csv::Writer::from_path(&output_path)?;
    writer.write_record([
        "date",
        "region",
        "product",
        "total_sales",
        "target_daily",
        "delta_vs_target",
        "delta_vs_yesterday",
        "avg_7d_sales",
        "day_name",
        "is_weekend",
    ])?;

    let mut rows = 0usize;
    for (region_idx, region) in REGIONS.iter().enumerate() {
        for (product_idx, product) in PRODUCTS.iter().enumerate() {
            // 确定性的基准销售额, 按组合区分量级
            let base = 8000.0 + 1500.0 * region_idx as f64 + 700.0 * product_idx as f64;
            let target = base * 1.05;
            let mut yesterday = base;
            let mut history: Vec<f64> = Vec::new();

            for day_offset in 0..DAYS {
                let date = start + Duration::days(day_offset);

                // 周期性波动 + 周末回落, 保证样例覆盖三种状态
                let wave = ((day_offset * (region_idx as i64 + 2)) % 7) as f64;
                let mut total = base + wave * 180.0 - 500.0;
                let is_weekend =
                    matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
                if is_weekend {
                    total *= 0.72;
                }

                let avg_7d = if history.is_empty() {
                    total
                } else {
                    let window: Vec<f64> =
                        history.iter().rev().take(7).copied().collect();
                    window.iter().sum::<f64>() / window.len() as f64
                };

                let delta_vs_target = (total - target) / target * 100.0;
                let delta_vs_yesterday = if yesterday > 0.0 {
                    (total - yesterday) / yesterday * 100.0
                } else {
                    0.0
                };

                writer.write_record([
                    date.format("%Y-%m-%d").to_string(),
                    (*region).to_string(),
                    (*product).to_string(),
                    format!("{:.0}", total),
                    format!("{:.0}", target),
                    format!("{:.1}", delta_vs_target),
                    format!("{:.1}", delta_vs_yesterday),
                    format!("{:.0}", avg_7d),
                    date.format("%A").to_string(),
                    if is_weekend { "True" } else { "False" }.to_string(),
                ])?;

                history.push(total);
                yesterday = total;
                rows += 1;
            }
        }
    }

    writer.flush()?;
    println!("样例数据已生成: {} ({} 行)", output_path, rows);
    Ok(())
}
