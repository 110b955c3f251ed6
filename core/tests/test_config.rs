#[cfg(test)]
mod tests {
    use archive_core::config::{ArchiveConfig, ArchiveFlags};
    use archive_core::constants::{flag_bits, ARCHIVE_VERSION, DEFAULT_MAX_SEQUENCE_LEN, MAGIC_BYTE};
    use archive_core::types::ErrorKind;

    #[test]
    fn default_config() {
        let c = ArchiveConfig::default();
        assert_eq!(c.magic, MAGIC_BYTE);
        assert_eq!(c.version, ARCHIVE_VERSION);
        assert!(c.flags.is_empty());
        assert_eq!(c.max_sequence_len, DEFAULT_MAX_SEQUENCE_LEN);
        assert!(!c.no_infnan());
        assert!(!c.no_header());
        assert!(c.allows_denormals());
        c.validate().unwrap();
    }

    #[test]
    fn flag_bits_match_registry() {
        assert_eq!(ArchiveFlags::NO_HEADER.bits(), flag_bits::NO_HEADER);
        assert_eq!(ArchiveFlags::NO_INFNAN.bits(), 64);
        assert_eq!(ArchiveFlags::NO_DENORMALS.bits(), flag_bits::NO_DENORMALS);
    }

    #[test]
    fn predicates_follow_flags() {
        let c = ArchiveConfig::new(ArchiveFlags::NO_INFNAN | ArchiveFlags::NO_DENORMALS);
        assert!(c.no_infnan());
        assert!(!c.allows_denormals());
        assert!(!c.no_header());
    }

    #[test]
    fn zero_version_config_is_invalid() {
        let c = ArchiveConfig::default().with_version(0);
        assert_eq!(c.validate().unwrap_err().kind(), ErrorKind::Malformed);
    }

    #[test]
    fn version_above_supported_is_invalid() {
        let c = ArchiveConfig::default().with_version(ARCHIVE_VERSION + 1);
        assert_eq!(c.validate().unwrap_err().kind(), ErrorKind::Malformed);
        assert!(ArchiveConfig::from_json(r#"{"version": 500}"#).is_err());

        ArchiveConfig::default().with_version(ARCHIVE_VERSION).validate().unwrap();
    }

    #[test]
    fn zero_sequence_limit_is_invalid() {
        let c = ArchiveConfig::default().with_max_sequence_len(0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn json_missing_fields_take_defaults() {
        assert_eq!(ArchiveConfig::from_json("{}").unwrap(), ArchiveConfig::default());

        let c = ArchiveConfig::from_json(r#"{"version": 1, "max_sequence_len": 16}"#).unwrap();
        assert_eq!(c.max_sequence_len, 16);
        assert_eq!(c.magic, MAGIC_BYTE);
    }

    #[test]
    fn json_roundtrip_keeps_flags() {
        let c = ArchiveConfig::default()
            .with_flags(ArchiveFlags::NO_INFNAN | ArchiveFlags::NO_HEADER)
            .with_max_sequence_len(1024);
        let json = c.to_json().unwrap();
        assert_eq!(ArchiveConfig::from_json(&json).unwrap(), c);
    }

    #[test]
    fn json_rejects_invalid_policy() {
        assert!(ArchiveConfig::from_json(r#"{"version": 0}"#).is_err());
        assert!(ArchiveConfig::from_json("not json").is_err());
    }

    #[test]
    fn writer_refuses_invalid_config() {
        let c = ArchiveConfig::default().with_version(0);
        let err = archive_core::archive::ArchiveWriter::with_config(Vec::new(), c).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }
}
