mod common;

use common::TestApp;

#[tokio::test]
async fn test_doctor_home() {
    let app = TestApp::new();
    let body = app.get_ok("/").await;
    let view = &body["view"];

    assert_eq!(view["profile"]["name"], "Dr. Priya Sharma");
    assert_eq!(view["progress"]["current"], 18.5);
    assert_eq!(view["progress"]["total"], 30.0);
    assert_eq!(view["progress"]["remaining"], 11.5);
    assert_eq!(view["recentCertificates"].as_array().unwrap().len(), 4);

    let badges: Vec<&str> = view["badges"].as_array().unwrap().iter().map(|b| b["name"].as_str().unwrap()).collect();
    assert_eq!(badges, vec!["Council-Ready", "First 10", "Halfway There", "Speaker"]);
    assert_eq!(view["nextBadge"]["name"], "Full Cycle");
    assert!(!view["nextActions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_doctor_home_credits_breakdown() {
    let app = TestApp::new();
    let body = app.get_ok("/").await;
    let breakdown = &body["view"]["breakdown"];

    assert_eq!(breakdown["thisMonth"]["total"], 3.0);
    assert_eq!(breakdown["thisMonth"]["events"][0]["title"], "Critical Care Update 2025");
    assert_eq!(breakdown["thisMonth"]["events"][0]["date"], "Oct 12");

    let councils: Vec<(&str, f64)> = breakdown["byCouncil"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| (c["council"].as_str().unwrap(), c["hours"].as_f64().unwrap()))
        .collect();
    assert_eq!(councils, vec![("DMC", 14.5), ("RMC", 4.0)]);
    let dmc_share = breakdown["byCouncil"][0]["share"].as_f64().unwrap();
    assert!((dmc_share - 14.5 / 30.0).abs() < 1e-4);
    assert_eq!(breakdown["councilSummary"], "DMC 14.5 • RMC 4.0");

    let specialties: Vec<&str> = breakdown["bySpecialty"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(specialties, vec!["Cardiology", "Critical Care", "Neurology", "Anesthesia"]);
    assert_eq!(breakdown["specialtyCount"], 4);
}

#[tokio::test]
async fn test_achievements() {
    let app = TestApp::new();
    let body = app.get_ok("/achievements").await;
    let view = &body["view"];

    assert_eq!(view["unlocked"], 4);
    assert_eq!(view["total"], 7);
    let categories: Vec<&str> = view["groups"].as_array().unwrap().iter().map(|g| g["category"].as_str().unwrap()).collect();
    assert_eq!(categories, vec!["core", "contribution", "compliance"]);
}

#[tokio::test]
async fn test_organizer_profile() {
    let app = TestApp::new();
    let body = app.get_ok("/organizer/profile").await;
    let view = &body["view"];

    assert_eq!(view["profile"]["name"], "Dr. Rajesh Kumar");
    assert_eq!(view["stats"]["totalEvents"], 3);
    assert_eq!(view["stats"]["totalAttendees"], 382);
    assert_eq!(view["stats"]["totalCreditsIssued"], 14.0);
    assert!(view["stats"]["upcomingEvents"].as_u64().unwrap() <= 3);

    let hosted: Vec<(&str, u64)> = view["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| (h["event"]["id"].as_str().unwrap(), h["attendees"].as_u64().unwrap()))
        .collect();
    assert_eq!(hosted, vec![("1", 135), ("2", 147), ("3", 100)]);
    assert!(view["events"].as_array().unwrap().iter().all(|h| h["isPast"].is_boolean()));
}
