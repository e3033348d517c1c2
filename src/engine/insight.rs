// ==========================================
// 销售日报监控系统 - 日报生成引擎
// ==========================================
// 职责: 组合汇总 → 自然语言日报 (印尼语固定模板)
// 红线: 纯模板分支选择, 无随机性, 无外部调用;
//       相同输入必须产出逐字节相同的报告
// ==========================================
// 模板结构: 执行摘要(按整体状态三分支) → 关键指标 →
//           预警清单(危急前3 + 警告前2) → 成因分析 → 建议行动 → 状态脚注
// ==========================================

use crate::domain::summary::PortfolioSummary;
use crate::domain::types::RecordStatus;
use std::fmt::Write;

// ==========================================
// InsightComposer - 日报生成引擎
// ==========================================
pub struct InsightComposer;

impl Default for InsightComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightComposer {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成日报全文
    ///
    /// 分支键: overall_status (CRITICAL / WARNING / OK)。
    /// 预警条目携带该记录首条违规的描述, 无违规时用通用兜底文案
    pub fn compose(&self, summary: &PortfolioSummary) -> String {
        let status = summary.overall_status;
        let day_name_id = translate_day_name(&summary.day_name);
        let achievement = summary.portfolio_achievement;
        let delta_yesterday = summary.delta_vs_yesterday;
        let trend_word = if delta_yesterday < 0.0 { "menurun" } else { "meningkat" };

        let mut insight = format!(
            "🧾 LAPORAN PENJUALAN HARIAN — {}, {}\n\n📌 **Ringkasan Eksekutif**\n",
            day_name_id, summary.date
        );

        // ===== 执行摘要 (按状态三分支) =====
        match status {
            RecordStatus::Critical => {
                let _ = write!(
                    insight,
                    "- Portofolio berkinerja jauh di bawah target: **{:.1}% dari target tercapai**\n\
                     - {} masalah kritis memerlukan perhatian segera\n\
                     - Penjualan {} {:.1}% vs kemarin\n\
                     - Intervensi mendesak diperlukan untuk mencegah penurunan lebih lanjut\n\
                     - Manajer regional harus menyelidiki akar masalah hari ini\n",
                    achievement,
                    summary.critical_count,
                    trend_word,
                    delta_yesterday.abs()
                );
            }
            RecordStatus::Warning => {
                let _ = write!(
                    insight,
                    "- Portofolio mencapai **{:.1}% dari target** — di bawah ekspektasi\n\
                     - {} sinyal peringatan terdeteksi, {} masalah kritis\n\
                     - Penjualan {} {:.1}% vs kemarin\n\
                     - Pemantauan ketat diperlukan; siapkan rencana kontingensi\n\
                     - Beberapa titik terang teridentifikasi pada performa terbaik\n",
                    achievement,
                    summary.warning_count,
                    summary.critical_count,
                    trend_word,
                    delta_yesterday.abs()
                );
            }
            RecordStatus::Ok => {
                let _ = write!(
                    insight,
                    "- Portofolio berkinerja baik: **{:.1}% dari target tercapai**\n\
                     - Semua wilayah dan produk dalam rentang yang dapat diterima\n\
                     - Penjualan {} {:.1}% vs kemarin\n\
                     - Tidak ada kekhawatiran mendesak; pertahankan momentum saat ini\n\
                     - Lanjutkan pemantauan untuk tren yang muncul\n",
                    achievement,
                    trend_word,
                    delta_yesterday.abs()
                );
            }
        }

        // ===== 关键指标 =====
        let _ = write!(
            insight,
            "\n📊 **Metrik Utama**\n\
             - **Total Penjualan**: {}\n\
             - **Target**: {}\n\
             - **Selisih vs Target**: {:+.1}%\n\
             - **Perubahan vs Kemarin**: {:+.1}%\n",
            format_rupiah(summary.total_sales),
            format_rupiah(summary.total_target),
            achievement - 100.0,
            delta_yesterday
        );

        // ===== 预警清单 (危急前3 + 警告前2) =====
        insight.push_str("\n⚠️ **Peringatan & Risiko**\n");

        for issue in summary.critical_issues.iter().take(3) {
            let _ = write!(
                insight,
                "- 🚨 **KRITIS**: {} - {}: {} ({}, {:+.1}% vs target, {:+.1}% vs kemarin)\n",
                issue.record.region,
                issue.record.product,
                issue.primary_issue_message(),
                format_rupiah(issue.record.total_sales),
                issue.record.delta_vs_target,
                issue.record.delta_vs_yesterday
            );
        }

        for issue in summary.warning_issues.iter().take(2) {
            let _ = write!(
                insight,
                "- ⚠️ **PERINGATAN**: {} - {}: {} ({:+.1}% vs target)\n",
                issue.record.region,
                issue.record.product,
                issue.primary_issue_message(),
                issue.record.delta_vs_target
            );
        }

        if summary.critical_issues.is_empty() && summary.warning_issues.is_empty() {
            insight.push_str("- ✅ Tidak ada masalah kritis atau peringatan terdeteksi\n");
        }

        // ===== 成因分析 =====
        insight.push_str("\n🧠 **Analisis AI (Mengapa ini terjadi)**\n");

        match status {
            RecordStatus::Critical => {
                insight.push_str(
                    "- Penurunan tajam menunjukkan masalah operasional (inventori, staf, sistem) atau faktor eksternal (aktivitas kompetitor, cuaca)\n\
                     - Beberapa masalah kritis mengindikasikan masalah sistemik yang memerlukan perhatian pimpinan\n\
                     - Analisis pola menunjukkan ini bukan fluktuasi normal\n",
                );
            }
            RecordStatus::Warning => {
                insight.push_str(
                    "- Penurunan kinerja mungkin sementara, tetapi tren memerlukan pemantauan\n\
                     - Beberapa wilayah/produk berkinerja buruk sementara yang lain mengkompensasi\n\
                     - Pola akhir pekan/hari kerja mungkin mempengaruhi hasil\n",
                );
            }
            RecordStatus::Ok => {
                insight.push_str(
                    "- Eksekusi kuat di semua wilayah dan lini produk\n\
                     - Momentum penjualan positif dan berkelanjutan\n\
                     - Strategi saat ini efektif\n",
                );
            }
        }

        // ===== 建议行动 =====
        insight.push_str("\n🎯 **Tindakan yang Direkomendasikan (Hari Ini)**\n");

        match status {
            RecordStatus::Critical => {
                insight.push_str(
                    "1. **MENDESAK**: Manajer regional hubungi lokasi yang berkinerja buruk segera\n\
                     2. **MENDESAK**: Verifikasi inventori, staf, dan fungsi sistem\n\
                     3. Eskalasi ke VP Penjualan jika masalah tidak terselesaikan pada akhir hari\n\
                     4. Siapkan rencana tindakan korektif untuk besok\n\
                     5. Periksa ulang penjualan jam 3 sore untuk menilai efektivitas intervensi\n",
                );
            }
            RecordStatus::Warning => {
                insight.push_str(
                    "1. Tinjau kombinasi wilayah-produk yang ditandai untuk masalah yang diketahui\n\
                     2. Periksa promosi kompetitor atau perubahan pasar\n\
                     3. Siapkan kontingensi jika tren berlanjut besok\n\
                     4. Pantau dengan ketat sepanjang hari\n\
                     5. Dokumentasikan temuan untuk analisis pola\n",
                );
            }
            RecordStatus::Ok => {
                insight.push_str(
                    "1. Lanjutkan strategi dan eksekusi penjualan saat ini\n\
                     2. Bagikan praktik terbaik dari performa terbaik\n\
                     3. Pertahankan tingkat inventori dan staf\n\
                     4. Pantau untuk masalah yang muncul\n\
                     5. Persiapkan untuk periode promosi mendatang\n",
                );
            }
        }

        // ===== 状态脚注 =====
        let status_icon = match status {
            RecordStatus::Critical => "🚨",
            RecordStatus::Warning => "⚠️",
            RecordStatus::Ok => "✅",
        };
        let _ = write!(insight, "\n**Status**: {} {}\n", status_icon, status);

        insight
    }
}

// ==========================================
// 格式化辅助
// ==========================================

/// 印尼盾金额: 四舍五入到整数, 千分位逗号分组
pub fn format_rupiah(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (idx + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("Rp -{}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// 英文星期名 → 印尼语 (未识别时原样返回)
pub fn translate_day_name(day_name: &str) -> &str {
    match day_name {
        "Monday" => "Senin",
        "Tuesday" => "Selasa",
        "Wednesday" => "Rabu",
        "Thursday" => "Kamis",
        "Friday" => "Jumat",
        "Saturday" => "Sabtu",
        "Sunday" => "Minggu",
        other => other,
    }
}
