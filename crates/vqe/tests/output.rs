use std::fs;
use vqe::{convergence_study, theta_scan, write_csv, EstimatorConfig, VqeError};

#[test]
fn scan_csv_has_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.csv");

    let scan = theta_scan(&EstimatorConfig::default().with_iterations(5), 4).unwrap();
    write_csv(&path, &scan.points).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "theta,sampled,std_error,exact");
    assert_eq!(lines.len(), 6);
    assert!(lines[1].starts_with("0,"));
    assert_eq!(lines[3].split(',').count(), 4);
}

#[test]
fn convergence_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conv.csv");

    let points = convergence_study(&EstimatorConfig::default(), &[5, 10]).unwrap();
    write_csv(&path, &points).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("iterations,mean,std_error,abs_error\n5,"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn unwritable_path_reports_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");

    let points = convergence_study(&EstimatorConfig::default(), &[5]).unwrap();
    match write_csv(&path, &points) {
        Err(VqeError::Output { path: p, .. }) => assert!(p.ends_with("out.csv")),
        other => panic!("expected output error, got {:?}", other),
    }
}
