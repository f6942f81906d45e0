use sea_orm::ActiveValue;
use sequencescape::entities::{library, sample, study};
use sequencescape::{Library, MapperError, ModelConverter, ModelKind, Property, Record, Sample, Study, Well};

#[test]
fn test_sample_to_active_model() {
    let sample = Sample {
        name: Some("sample_1".to_string()),
        accession_number: Some("EGAN00001".to_string()),
        taxon_id: Some(9606),
        country_of_origin: Some("Iceland".to_string()),
        ..Sample::new(12)
    };

    let active = sample.to_active_model();

    // The row key is assigned by the database
    assert_eq!(active.id, ActiveValue::NotSet);
    assert_eq!(active.internal_id, ActiveValue::Set(12));
    assert_eq!(active.name, ActiveValue::Set(Some("sample_1".to_string())));
    assert_eq!(active.accession_number, ActiveValue::Set(Some("EGAN00001".to_string())));
    assert_eq!(active.taxon_id, ActiveValue::Set(Some(9606)));
    assert_eq!(active.country_of_origin, ActiveValue::Set(Some("Iceland".to_string())));
    assert_eq!(active.ethnicity, ActiveValue::Set(None));
    assert_eq!(active.is_current, ActiveValue::Set(true));
}

#[test]
fn test_sample_from_row() {
    let row = sample::Model {
        id: 40,
        internal_id: 3,
        name: Some("sample_3".to_string()),
        accession_number: None,
        organism: Some("Homo sapiens".to_string()),
        common_name: None,
        taxon_id: Some(9606),
        gender: Some("male".to_string()),
        ethnicity: None,
        cohort: None,
        country_of_origin: None,
        geographical_region: None,
        is_current: false,
    };

    let sample = Sample::from_row(row);
    assert_eq!(
        sample,
        Sample {
            name: Some("sample_3".to_string()),
            organism: Some("Homo sapiens".to_string()),
            taxon_id: Some(9606),
            gender: Some("male".to_string()),
            is_current: false,
            ..Sample::new(3)
        }
    );
}

#[test]
fn test_study_conversions() {
    let study = Study {
        name: Some("study_1".to_string()),
        study_title: Some("Genomes of Iceland".to_string()),
        faculty_sponsor: Some("Dr Sponsor".to_string()),
        ..Study::new(1)
    };

    let active: study::ActiveModel = (&study).into();
    assert_eq!(active.study_title, ActiveValue::Set(Some("Genomes of Iceland".to_string())));
    assert_eq!(active.faculty_sponsor, ActiveValue::Set(Some("Dr Sponsor".to_string())));

    let row = study::Model {
        id: 1,
        internal_id: 1,
        name: study.name.clone(),
        accession_number: None,
        study_type: None,
        description: None,
        study_title: study.study_title.clone(),
        study_visibility: None,
        faculty_sponsor: study.faculty_sponsor.clone(),
        is_current: true,
    };
    assert_eq!(Study::from(row), study);
}

#[test]
fn test_library_conversions() {
    let library = Library {
        name: Some("library_9".to_string()),
        library_type: Some("Pulldown".to_string()),
        ..Library::new(9)
    };

    let active: library::ActiveModel = (&library).into();
    assert_eq!(active.library_type, ActiveValue::Set(Some("Pulldown".to_string())));

    let row = library::Model {
        id: 2,
        internal_id: 9,
        name: Some("library_9".to_string()),
        library_type: Some("Pulldown".to_string()),
        is_current: true,
    };
    assert_eq!(Library::from_row(row), library);
}

#[test]
fn test_new_records_are_current() {
    assert!(Sample::new(1).is_current);
    assert!(Study::new(1).is_current);
    assert!(Library::new(1).is_current);
    assert!(Well::new(1).is_current);
    assert_eq!(Well::new(5).internal_id(), 5);
}

#[test]
fn test_standard_converter_registers_every_kind() {
    let converter = ModelConverter::standard();
    let kinds: Vec<ModelKind> = converter.kinds().collect();
    assert_eq!(
        kinds,
        vec![
            ModelKind::Sample,
            ModelKind::Study,
            ModelKind::Library,
            ModelKind::MultiplexedLibrary,
            ModelKind::Well
        ]
    );

    let sample = converter.capabilities(ModelKind::Sample).unwrap();
    assert_eq!(sample.table, "sample");
    assert_eq!(sample.properties, Property::ALL.to_vec());
    assert!(sample.is_current);

    let well = converter.capabilities(ModelKind::Well).unwrap();
    assert_eq!(well.table, "well");
    assert!(well.supports(Property::Name));
    assert!(!well.supports(Property::AccessionNumber));
    assert!(well.ensure_queryable(Property::InternalId).is_ok());
    assert!(matches!(
        well.ensure_queryable(Property::AccessionNumber),
        Err(MapperError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_unregistered_kind() {
    let converter = ModelConverter::new().register::<Study>();
    assert!(converter.is_registered(ModelKind::Study));
    assert!(!converter.is_registered(ModelKind::MultiplexedLibrary));
    assert!(matches!(
        converter.capabilities(ModelKind::MultiplexedLibrary),
        Err(MapperError::NotImplemented(_))
    ));
}
