//! Tests for [`ReportService`].

use std::sync::Arc;

use kitroute_shared::{CsvQuoting, ReportsConfig};
use lopdf::Document;
use rstest::rstest;
use uuid::Uuid;

use super::assemblers::fixtures::{Seeded, zone};
use super::error::ReportError;
use super::service::{ReportService, file_name};
use super::types::{ExportFormat, OrderStatus, ReportFilters, ReportType};

fn service(seeded: &Seeded, settings: ReportsConfig) -> ReportService {
    ReportService::new(Arc::new(seeded.source.clone()), settings)
}

/// Two confirmed kits on KR25-0001 and one cancelled kit on KR25-0002.
async fn seeded_event() -> Seeded {
    let seeded = Seeded::new().await;
    seeded
        .source
        .insert_zone(zone("Centro", 1, "58000000", "58099999"))
        .await;
    seeded
        .order(
            "KR25-0002",
            OrderStatus::Cancelado,
            "58010000",
            &[("Carla Dias", "G")],
        )
        .await;
    seeded
        .order(
            "KR25-0001",
            OrderStatus::Confirmado,
            "58010000",
            &[("Ana Souza", "P"), ("Bruno Lima", "M")],
        )
        .await;
    seeded
}

fn csv_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8(bytes.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_unknown_event_is_not_found() {
    let seeded = seeded_event().await;
    let service = service(&seeded, ReportsConfig::default());
    let missing = Uuid::new_v4();

    let err = service
        .generate(missing, ReportType::Kits, ExportFormat::Excel, &ReportFilters::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::EventNotFound(id) if id == missing));
    assert_eq!(err.to_string(), "Evento não encontrado");
    assert_eq!(seeded.source.zone_loads(), 0);
}

#[tokio::test]
async fn test_circuit_pdf_is_unsupported() {
    let seeded = seeded_event().await;
    let service = service(&seeded, ReportsConfig::default());

    let err = service
        .generate(
            seeded.event.id,
            ReportType::Circuit,
            ExportFormat::Pdf,
            &ReportFilters::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::UnsupportedFormat { .. }));
    assert!(err.to_string().contains("pdf"));
    assert!(err.to_string().contains("circuit"));
    assert_eq!(seeded.source.zone_loads(), 0);
}

#[tokio::test]
async fn test_status_filter_keeps_confirmed_kits() {
    let seeded = seeded_event().await;
    let service = service(&seeded, ReportsConfig::default());
    let filters = ReportFilters::new().with_statuses([OrderStatus::Confirmado]);

    let file = service
        .generate(seeded.event.id, ReportType::Kits, ExportFormat::Csv, &filters)
        .await
        .unwrap();
    let lines = csv_lines(&file.bytes);

    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("\"KR25-0001\",\"Ana Souza\""));
    assert!(lines[2].starts_with("\"KR25-0001\",\"Bruno Lima\""));
}

#[tokio::test]
async fn test_zones_load_once_per_call() {
    let seeded = seeded_event().await;
    let service = service(&seeded, ReportsConfig::default());
    let filters = ReportFilters::new();

    for report_type in [ReportType::Kits, ReportType::Circuit, ReportType::Orders] {
        service
            .generate(seeded.event.id, report_type, ExportFormat::Excel, &filters)
            .await
            .unwrap();
    }

    assert_eq!(seeded.source.zone_loads(), 3);
}

#[tokio::test]
async fn test_zone_changes_apply_to_next_call() {
    let seeded = Seeded::new().await;
    let zone_a = zone("Zona A", 1, "58000000", "58099999");
    let zone_b = zone("Zona B", 2, "58050000", "58150000");
    seeded.source.insert_zone(zone_a.clone()).await;
    seeded.source.insert_zone(zone_b.clone()).await;
    seeded
        .order("KR25-0001", OrderStatus::Confirmado, "58070000", &[("Ana Souza", "P")])
        .await;
    seeded
        .order("KR25-0002", OrderStatus::Confirmado, "58120000", &[("Bruno Lima", "M")])
        .await;

    let service = service(&seeded, ReportsConfig::default());
    let filters = ReportFilters::new().with_zones([zone_b.id]);
    let order_numbers = |bytes: &[u8]| -> Vec<String> {
        csv_lines(bytes)
            .iter()
            .skip(1)
            .map(|line| line.split(',').next().unwrap().trim_matches('"').to_string())
            .collect()
    };

    let before = service
        .generate(seeded.event.id, ReportType::Orders, ExportFormat::Csv, &filters)
        .await
        .unwrap();
    assert_eq!(order_numbers(&before.bytes), ["KR25-0002"]);

    seeded.source.set_zone_active(zone_a.id, false).await;

    let after = service
        .generate(seeded.event.id, ReportType::Orders, ExportFormat::Csv, &filters)
        .await
        .unwrap();
    assert_eq!(order_numbers(&after.bytes), ["KR25-0001", "KR25-0002"]);
    assert!(csv_lines(&after.bytes)[1].contains("\"Zona B\""));
}

#[rstest]
#[case(ReportType::Kits, ExportFormat::Excel)]
#[case(ReportType::Kits, ExportFormat::Csv)]
#[case(ReportType::Kits, ExportFormat::Pdf)]
#[case(ReportType::Circuit, ExportFormat::Excel)]
#[case(ReportType::Orders, ExportFormat::Excel)]
#[case(ReportType::Orders, ExportFormat::Csv)]
#[case(ReportType::Orders, ExportFormat::Pdf)]
#[tokio::test]
async fn test_supported_pairs_produce_files(
    #[case] report_type: ReportType,
    #[case] format: ExportFormat,
) {
    let seeded = seeded_event().await;
    let service = service(&seeded, ReportsConfig::default());

    let file = service
        .generate(seeded.event.id, report_type, format, &ReportFilters::new())
        .await
        .unwrap();

    assert!(!file.bytes.is_empty());
    assert_eq!(file.content_type, format.content_type());
    assert_eq!(
        file.file_name,
        format!(
            "relatorio-{}-corrida-de-sao-joao.{}",
            report_type.as_str(),
            format.extension()
        )
    );
}

#[tokio::test]
async fn test_orders_pdf_is_readable() {
    let seeded = seeded_event().await;
    let service = service(&seeded, ReportsConfig::default());

    let file = service
        .generate(
            seeded.event.id,
            ReportType::Orders,
            ExportFormat::Pdf,
            &ReportFilters::new(),
        )
        .await
        .unwrap();

    let doc = Document::load_mem(&file.bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[tokio::test]
async fn test_csv_quoting_follows_settings() {
    let seeded = Seeded::new().await;
    seeded
        .order(
            "KR25-0001",
            OrderStatus::Confirmado,
            "58010000",
            &[("Ana \"Aninha\" Souza", "P")],
        )
        .await;
    let settings = ReportsConfig {
        csv_quoting: CsvQuoting::Rfc4180,
        ..ReportsConfig::default()
    };

    let file = service(&seeded, settings)
        .generate(
            seeded.event.id,
            ReportType::Kits,
            ExportFormat::Csv,
            &ReportFilters::new(),
        )
        .await
        .unwrap();

    assert!(csv_lines(&file.bytes)[1].contains("\"Ana \"\"Aninha\"\" Souza\""));
}

#[tokio::test]
async fn test_sequential_and_concurrent_fetches_match() {
    let seeded = Seeded::new().await;
    for i in (1..=12).rev() {
        seeded
            .order(
                &format!("KR25-{i:04}"),
                OrderStatus::Confirmado,
                "58010000",
                &[("Atleta", "M")],
            )
            .await;
    }

    let mut outputs = Vec::new();
    for concurrency in [1, 8] {
        let settings = ReportsConfig {
            fetch_concurrency: concurrency,
            ..ReportsConfig::default()
        };
        let file = service(&seeded, settings)
            .generate(
                seeded.event.id,
                ReportType::Orders,
                ExportFormat::Csv,
                &ReportFilters::new(),
            )
            .await
            .unwrap();
        outputs.push(file.bytes);
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_file_name_slugs_event() {
    assert_eq!(
        file_name(ReportType::Orders, "Maratona Internacional 2025!", ExportFormat::Csv),
        "relatorio-orders-maratona-internacional-2025.csv"
    );
}
