//! Router and property tests for macro planning endpoints

#[cfg(test)]
mod tests {
    use crate::config::{ApiConfig, AppConfig};
    use crate::routes::create_router;
    use crate::services::MacroService;
    use crate::state::AppState;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use macrotrack_shared::types::MacrosFromAgeRequest;
    use macrotrack_shared::TagPolicy;
    use proptest::prelude::*;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(config: AppConfig, path: &str, body: Value) -> (StatusCode, Value) {
        let app = create_router(AppState::new(config));
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn strict_config() -> AppConfig {
        AppConfig {
            api: ApiConfig {
                strict_inputs: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_from_age_returns_camel_case_targets() {
        let (status, body) = post_json(
            AppConfig::default(),
            "/api/v1/macros/from-age",
            json!({
                "age": 25,
                "sex": "female",
                "height": 165.0,
                "heightUnit": "cm",
                "weight": 60.0,
                "weightUnit": "kg",
                "activityLevel": "sedentary",
                "goal": "maintain",
                "goalIntensity": "mild"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        // BMR 1345.25 x 1.2 = 1614.3
        assert_eq!(body["calories"], 1614);
        assert_eq!(body["protein"], 120);
        assert_eq!(body["fats"], 45);
        assert_eq!(body["carbs"], 182);
        assert_eq!(body["baseTDEE"], 1614);
    }

    #[tokio::test]
    async fn test_unknown_tag_falls_back_when_lenient() {
        let (status, body) = post_json(
            AppConfig::default(),
            "/api/v1/macros/breakdown",
            json!({
                "age": 30,
                "sex": "male",
                "height": 180.0,
                "weight": 80.0,
                "activityLevel": "extreme"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["activityMultiplier"], 1.2);
    }

    #[tokio::test]
    async fn test_unknown_tag_rejected_when_strict() {
        let (status, body) = post_json(
            strict_config(),
            "/api/v1/macros/breakdown",
            json!({
                "age": 30,
                "sex": "male",
                "height": 180.0,
                "heightUnit": "cm",
                "weight": 80.0,
                "weightUnit": "kg",
                "activityLevel": "extreme",
                "goal": "maintain",
                "goalIntensity": "mild"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "activity_level");
    }

    #[tokio::test]
    async fn test_strict_accepts_maintain_without_intensity() {
        let (status, body) = post_json(
            strict_config(),
            "/api/v1/macros/from-age",
            json!({
                "age": 30,
                "sex": "male",
                "height": 180.0,
                "heightUnit": "cm",
                "weight": 80.0,
                "weightUnit": "kg",
                "activityLevel": "moderate",
                "goal": "maintain"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["calories"], 2759);
        assert_eq!(body["baseTDEE"], 2759);
    }

    #[tokio::test]
    async fn test_body_limit_rejects_oversized_request() {
        let config = AppConfig {
            api: ApiConfig {
                body_limit_bytes: 16,
                ..Default::default()
            },
            ..Default::default()
        };
        let (status, _) = post_json(
            config,
            "/api/v1/macros/calories",
            json!({ "protein": 150.0, "carbs": 200.0, "fats": 60.0 }),
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    fn request_strategy() -> impl Strategy<Value = MacrosFromAgeRequest> {
        (
            prop::sample::select(vec!["male", "female", "other", ""]),
            prop::sample::select(vec!["sedentary", "lightly", "moderate", "very"]),
            prop::sample::select(vec!["lose", "maintain", "build"]),
            prop::sample::select(vec!["mild", "moderate", "aggressive"]),
            18i32..90,
            140.0f64..210.0,
            40.0f64..160.0,
        )
            .prop_map(|(sex, activity, goal, intensity, age, height, weight)| {
                MacrosFromAgeRequest {
                    age,
                    sex: Some(sex.to_string()),
                    height,
                    height_unit: Some("cm".to_string()),
                    weight,
                    weight_unit: Some("kg".to_string()),
                    activity_level: Some(activity.to_string()),
                    goal: Some(goal.to_string()),
                    goal_intensity: Some(intensity.to_string()),
                }
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Valid tags resolve the same way under both policies
        #[test]
        fn prop_policies_agree_on_valid_input(req in request_strategy()) {
            let lenient = MacroService::breakdown(&req, TagPolicy::Lenient).unwrap();
            let strict = MacroService::breakdown(&req, TagPolicy::Strict).unwrap();
            prop_assert_eq!(lenient.targets, strict.targets);
        }

        /// Weight-loss targets never drop below the sex-specific floor
        #[test]
        fn prop_lose_respects_floor(req in request_strategy()) {
            let mut req = req;
            req.goal = Some("lose".to_string());
            let breakdown = MacroService::breakdown(&req, TagPolicy::Strict).unwrap();
            let floor = if req.sex.as_deref() == Some("male") { 1500 } else { 1200 };
            prop_assert!(breakdown.targets.calories >= floor);
        }

        /// Reported calories equal the goal-adjusted target
        #[test]
        fn prop_targets_carry_goal_calories(req in request_strategy()) {
            let breakdown = MacroService::breakdown(&req, TagPolicy::Lenient).unwrap();
            prop_assert_eq!(breakdown.targets.calories, breakdown.target_calories);
        }
    }
}
