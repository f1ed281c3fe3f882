use std::sync::Arc;

use onboard::config::{OnboardPaths, Settings};
use onboard::models::{AttachmentRef, CompanyDraft, Service};
use onboard::storage::{
    BlobStore, BlobWriter, FileBlobStore, ResilientBlobStore, COMPANY_LOGO_KEY, LOGO_STORE,
};
use onboard::submission::{JsonFileSink, SubmissionEnvelope};
use onboard::wizard::{Screen, Shell, Step, StepOutcome, WizardState, WizardStore};
use tempfile::TempDir;

fn open_blobs(paths: &OnboardPaths) -> Arc<dyn BlobStore> {
    Arc::new(ResilientBlobStore::open(paths, &Settings::default()))
}

fn fresh_handle(paths: &OnboardPaths) -> FileBlobStore {
    let settings = Settings::default();
    FileBlobStore::open(
        paths.blob_dir(),
        &settings.blob_database,
        settings.blob_version,
        LOGO_STORE,
    )
    .unwrap()
}

#[test]
fn full_wizard_submits_and_resets() {
    let temp_dir = TempDir::new().unwrap();
    let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
    let blobs = open_blobs(&paths);
    let writer = BlobWriter::new(Arc::clone(&blobs));
    let sink = JsonFileSink::new(paths.submissions_dir());
    let mut store = WizardStore::new();
    let mut shell = Shell::new(&store, blobs.as_ref());

    let logo = temp_dir.path().join("logo.png");
    std::fs::write(&logo, b"\x89PNG logo").unwrap();

    // Step 1
    let pending = match shell.screen_mut() {
        Screen::Company(c) => {
            let d = c.draft_mut();
            d.company_name = Some("Acme".into());
            d.company_type = Some("Private Limited".into());
            d.contact_name = Some("Jo".into());
            d.contact_email = Some("jo@x.com".into());
            d.contact_phone = Some("123456".into());
            c.attach_logo(logo.to_str().unwrap());
            match c.submit(&mut store, &writer) {
                StepOutcome::Advanced { to, pending_write } => {
                    assert_eq!(to, Step::Address);
                    pending_write.expect("logo write spawned")
                }
                other => panic!("unexpected outcome: {:?}", other),
            }
        }
        _ => panic!("expected the company screen"),
    };
    assert!(shell.sync(&store, blobs.as_ref()));

    // The write runs detached; once settled, a fresh handle sees the bytes
    pending.wait().unwrap();
    assert_eq!(
        fresh_handle(&paths).get(COMPANY_LOGO_KEY).unwrap(),
        Some(b"\x89PNG logo".to_vec())
    );

    // Step 2
    match shell.screen_mut() {
        Screen::Address(c) => {
            c.draft_mut().address = Some("1 Rd".into());
            c.select_country(Some("India".into()));
            assert_eq!(c.state_options(), &["Gujarat", "Maharashtra", "Rajasthan"]);
            c.draft_mut().state = Some("Rajasthan".into());
            c.draft_mut().zip_code = Some("302001".into());
            c.draft_mut().bank_name = Some("X".into());
            assert!(!c.submit(&mut store).is_invalid());
        }
        _ => panic!("expected the address screen"),
    }
    shell.sync(&store, blobs.as_ref());

    // Step 3
    let submission = match shell.screen_mut() {
        Screen::Services(c) => {
            c.toggle_service(Service::Consulting);
            c.toggle_service(Service::Training);
            c.draft_mut().pricing_model = Some("Pay-per-use".into());
            c.draft_mut().currency = Some("INR".into());
            c.draft_mut().declaration = Some(true);
            match c.submit(&mut store, &sink).unwrap() {
                StepOutcome::Submitted(submission) => submission,
                other => panic!("unexpected outcome: {:?}", other),
            }
        }
        _ => panic!("expected the services screen"),
    };

    assert_eq!(submission.step2.zip_code, 302001);
    assert_eq!(
        submission.step3.services,
        vec![Service::Consulting, Service::Training]
    );
    assert_eq!(store.snapshot(), WizardState::default());

    // Shell is back on step 1 with empty fields; only the stored logo survives
    shell.sync(&store, blobs.as_ref());
    match shell.screen() {
        Screen::Company(c) => {
            let expected = CompanyDraft {
                company_logo: Some(AttachmentRef::Stored(COMPANY_LOGO_KEY.into())),
                ..CompanyDraft::default()
            };
            assert_eq!(c.draft(), &expected);
        }
        _ => panic!("expected the company screen"),
    }

    let saved: Vec<_> = std::fs::read_dir(paths.submissions_dir())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(saved.len(), 1);
    let envelope: SubmissionEnvelope =
        serde_json::from_slice(&std::fs::read(&saved[0]).unwrap()).unwrap();
    assert_eq!(envelope.payload, submission);
}

#[test]
fn navigating_back_keeps_unvalidated_drafts() {
    let temp_dir = TempDir::new().unwrap();
    let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
    let blobs = open_blobs(&paths);
    let mut store = WizardStore::new();
    store.advance();
    let mut shell = Shell::new(&store, blobs.as_ref());

    match shell.screen_mut() {
        Screen::Address(c) => {
            c.draft_mut().zip_code = Some("not a zip".into());
            assert_eq!(c.previous(&mut store), Step::Company);
        }
        _ => panic!("expected the address screen"),
    }
    shell.sync(&store, blobs.as_ref());
    assert_eq!(shell.step(), Step::Company);

    store.advance();
    shell.sync(&store, blobs.as_ref());
    match shell.screen() {
        Screen::Address(c) => assert_eq!(c.draft().zip_code.as_deref(), Some("not a zip")),
        _ => panic!("expected the address screen"),
    }
}

#[test]
fn unusable_blob_root_degrades_to_memory() {
    let temp_dir = TempDir::new().unwrap();
    let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
    std::fs::create_dir_all(paths.data_dir()).unwrap();
    std::fs::write(paths.blob_dir(), b"not a directory").unwrap();

    let store = ResilientBlobStore::open(&paths, &Settings::default());
    assert!(store.is_degraded());

    store.put(COMPANY_LOGO_KEY, b"png").unwrap();
    assert_eq!(store.get(COMPANY_LOGO_KEY).unwrap(), Some(b"png".to_vec()));
}
