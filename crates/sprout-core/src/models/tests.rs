#[cfg(test)]
mod model_tests {
    use jiff::civil::date;

    use crate::{
        models::{
            parse_date, Draft, DraftField, PlantType, Project, ProjectFields, ProjectId, SortKey,
        },
        SproutError,
    };

    fn create_test_fields() -> ProjectFields {
        ProjectFields {
            name: "Escola Estadual Girassol".to_string(),
            description: "Horta no fundo da quadra".to_string(),
            plant_type: PlantType::Tomate,
            start_date: date(2024, 3, 1),
        }
    }

    #[test]
    fn test_plant_type_parse_is_lenient() {
        assert_eq!("Pimentão".parse::<PlantType>(), Ok(PlantType::Pimentao));
        assert_eq!("pimentao".parse::<PlantType>(), Ok(PlantType::Pimentao));
        assert_eq!(" ORA-PRO-NOBIS ".parse::<PlantType>(), Ok(PlantType::OraProNobis));
        assert!("Manjericão".parse::<PlantType>().is_err());
    }

    #[test]
    fn test_plant_type_wire_labels_keep_accents() {
        let json = serde_json::to_string(&PlantType::Brocolis).unwrap();
        assert_eq!(json, "\"Brócolis\"");
        let back: PlantType = serde_json::from_str("\"Hortelã\"").unwrap();
        assert_eq!(back, PlantType::Hortela);
    }

    #[test]
    fn test_project_deserializes_from_wire() {
        let json = r#"{"_id":"a1","name":"Horta A","description":"grows mint here","plantType":"Hortelã","startDate":"2023-09-10"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, ProjectId::from("a1"));
        assert_eq!(project.plant_type, Some(PlantType::Hortela));
        assert_eq!(project.start_date, Some(date(2023, 9, 10)));
    }

    #[test]
    fn test_project_tolerates_legacy_records() {
        let json = r#"{"id":7,"name":"Horta antiga","description":null,"plantType":"","startDate":"2022-05-01T00:00:00.000Z"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, ProjectId::from("7"));
        assert_eq!(project.description, "");
        assert_eq!(project.plant_type, None);
        assert_eq!(project.start_date, Some(date(2022, 5, 1)));
    }

    #[test]
    fn test_project_fields_serialize_camel_case_without_id() {
        let value = serde_json::to_value(create_test_fields()).unwrap();
        assert_eq!(value["plantType"], "Tomate");
        assert_eq!(value["startDate"], "2024-03-01");
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_project_apply_keeps_identity() {
        let mut project = Project::new(ProjectId::from("x"), create_test_fields());
        let mut fields = create_test_fields();
        fields.name = "Renamed".to_string();
        fields.plant_type = PlantType::Cenoura;
        project.apply(fields);
        assert_eq!(project.id, ProjectId::from("x"));
        assert_eq!(project.name, "Renamed");
        assert_eq!(project.plant_type, Some(PlantType::Cenoura));
    }

    #[test]
    fn test_empty_draft_reports_all_required_fields() {
        let draft = Draft::default();
        assert!(draft.is_empty());
        assert_eq!(
            draft.missing_fields(),
            vec![DraftField::Name, DraftField::PlantType, DraftField::StartDate]
        );
        match draft.validate() {
            Err(SproutError::MissingFields { fields }) => assert_eq!(fields.len(), 3),
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_name_counts_as_missing() {
        let mut draft = Draft::from(create_test_fields());
        draft.name = "   ".to_string();
        assert_eq!(draft.missing_fields(), vec![DraftField::Name]);
    }

    #[test]
    fn test_draft_set_field_parses_values() {
        let mut draft = Draft::default();
        draft.set_field(DraftField::Name, "  Horta B ").unwrap();
        draft.set_field(DraftField::PlantType, "cenoura").unwrap();
        draft.set_field(DraftField::StartDate, "2024-01-31").unwrap();
        let fields = draft.validate().unwrap();
        assert_eq!(fields.name, "Horta B");
        assert_eq!(fields.plant_type, PlantType::Cenoura);
        assert_eq!(fields.start_date, date(2024, 1, 31));

        draft.set_field(DraftField::PlantType, "").unwrap();
        assert_eq!(draft.plant_type, None);
    }

    #[test]
    fn test_draft_set_field_rejects_bad_values() {
        let mut draft = Draft::default();
        let err = draft.set_field(DraftField::StartDate, "31/01/2024").unwrap_err();
        assert!(matches!(err, SproutError::InvalidInput { ref field, .. } if field == "startDate"));
        assert!(draft.set_field(DraftField::PlantType, "cactus").is_err());
        assert!(draft.is_empty());
    }

    #[test]
    fn test_start_date_rejects_trailing_garbage() {
        let mut draft = Draft::default();
        let err = draft.set_field(DraftField::StartDate, "2024-01-011").unwrap_err();
        assert!(matches!(err, SproutError::InvalidInput { ref field, .. } if field == "startDate"));
        assert_eq!(draft.start_date, None);

        assert!(parse_date("2024-01-01x").is_err());
        assert_eq!(parse_date("2024-01-01T10:30:00"), Ok(date(2024, 1, 1)));
        assert_eq!(parse_date("2024-01-01 10:30"), Ok(date(2024, 1, 1)));
        assert_eq!(parse_date("2024-01-01T00:00:00.000Z"), Ok(date(2024, 1, 1)));
    }

    #[test]
    fn test_draft_field_and_sort_key_parse() {
        assert_eq!("plant-type".parse::<DraftField>(), Ok(DraftField::PlantType));
        assert_eq!("startDate".parse::<DraftField>(), Ok(DraftField::StartDate));
        assert_eq!("plantType".parse::<SortKey>(), Ok(SortKey::PlantType));
        assert_eq!("DATE".parse::<SortKey>(), Ok(SortKey::Date));
        assert!("size".parse::<SortKey>().is_err());
    }
}
