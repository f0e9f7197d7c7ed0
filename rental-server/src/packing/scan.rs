//! Scan identifier resolution

use shared::packing::ScanRequest;

/// Resolve the device id of a scan
///
/// `device_id` wins when present. Otherwise the barcode payload is used:
/// a JSON object with a `device_id`/`deviceID` key is unwrapped, anything
/// else is taken as the identifier itself. Blank values count as absent.
pub fn resolve_device_id(req: &ScanRequest) -> Option<String> {
    if let Some(id) = non_blank(req.device_id.as_deref()) {
        return Some(id.to_string());
    }

    let payload = non_blank(req.barcode_payload.as_deref())?;
    if payload.starts_with('{')
        && let Ok(serde_json::Value::Object(map)) = serde_json::from_str(payload)
    {
        return ["device_id", "deviceID", "deviceId"]
            .iter()
            .find_map(|key| match map.get(*key) {
                Some(serde_json::Value::String(s)) => non_blank(Some(s.as_str())).map(str::to_string),
                Some(serde_json::Value::Number(n)) => Some(n.to_string()),
                _ => None,
            });
    }
    Some(payload.to_string())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(device_id: Option<&str>, payload: Option<&str>) -> ScanRequest {
        ScanRequest {
            device_id: device_id.map(Into::into),
            barcode_payload: payload.map(Into::into),
        }
    }

    #[test]
    fn test_direct_id_wins() {
        assert_eq!(
            resolve_device_id(&req(Some(" CAM-1 "), Some("CAM-2"))).as_deref(),
            Some("CAM-1")
        );
    }

    #[test]
    fn test_plain_payload() {
        assert_eq!(
            resolve_device_id(&req(None, Some("CAM-2\n"))).as_deref(),
            Some("CAM-2")
        );
        assert_eq!(
            resolve_device_id(&req(Some(""), Some("CAM-3"))).as_deref(),
            Some("CAM-3")
        );
    }

    #[test]
    fn test_json_payload_unwrapped() {
        assert_eq!(
            resolve_device_id(&req(None, Some(r#"{"deviceID":"LGT-4","v":1}"#))).as_deref(),
            Some("LGT-4")
        );
        assert_eq!(
            resolve_device_id(&req(None, Some(r#"{"device_id":42}"#))).as_deref(),
            Some("42")
        );
        // Object without an id key carries no identifier
        assert_eq!(resolve_device_id(&req(None, Some(r#"{"foo":"bar"}"#))), None);
    }

    #[test]
    fn test_missing_identifier() {
        assert_eq!(resolve_device_id(&req(None, None)), None);
        assert_eq!(resolve_device_id(&req(Some("  "), Some(""))), None);
    }
}
