//! Any status outside an operation's documented set maps to
//! `UnexpectedResponse` carrying that exact status code.

use apiclient_core::{
    ClientError, HttpResponse, PetStoreApi, PetStoreError, SoccerTeamApi, SoccerTeamError,
};
use proptest::prelude::*;

fn outside(documented: &'static [u16]) -> impl Strategy<Value = u16> {
    (100u16..600).prop_filter("documented status", move |code| !documented.contains(code))
}

fn pet_code<T>(result: Result<T, ClientError<PetStoreError>>) -> Option<u16> {
    match result {
        Err(ClientError::Api(PetStoreError::UnexpectedResponse { status_code })) => {
            Some(status_code)
        }
        _ => None,
    }
}

fn soccer_code<T>(
    result: Result<T, ClientError<SoccerTeamError>>,
) -> Option<u16> {
    match result {
        Err(ClientError::Api(SoccerTeamError::UnexpectedResponse { status_code })) => {
            Some(status_code)
        }
        _ => None,
    }
}

fn response(code: u16, body: &str) -> HttpResponse {
    HttpResponse::new(code, body)
}

proptest! {
    #[test]
    fn get_pet_undocumented(code in outside(&[200, 400, 404]), body in ".*") {
        let api = PetStoreApi::new("http://localhost");
        prop_assert_eq!(pet_code(api.parse_get_pet(response(code, &body))), Some(code));
    }

    #[test]
    fn update_pet_undocumented(code in outside(&[200, 400, 404, 422])) {
        let api = PetStoreApi::new("http://localhost");
        prop_assert_eq!(pet_code(api.parse_update_pet(response(code, "{}"))), Some(code));
    }

    #[test]
    fn delete_pet_undocumented(code in outside(&[200, 400])) {
        let api = PetStoreApi::new("http://localhost");
        prop_assert_eq!(pet_code(api.parse_delete_pet(response(code, ""))), Some(code));
    }

    #[test]
    fn create_user_non_success(code in (100u16..600).prop_filter("2xx", |c| !(200..300).contains(c))) {
        let api = PetStoreApi::new("http://localhost");
        prop_assert_eq!(pet_code(api.parse_create_user(response(code, ""))), Some(code));
    }

    #[test]
    fn add_player_undocumented(code in outside(&[201, 400])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_add_player(response(code, "{}"))), Some(code));
    }

    #[test]
    fn delete_player_undocumented(code in outside(&[204, 404])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_delete_player(response(code, ""))), Some(code));
    }

    #[test]
    fn set_lineup_undocumented(code in outside(&[200, 400, 404])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_set_lineup(response(code, ""))), Some(code));
    }

    #[test]
    fn get_matches_undocumented(code in outside(&[200])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_get_matches(response(code, "[]"))), Some(code));
    }

    #[test]
    fn add_pet_undocumented(code in outside(&[200, 400])) {
        let api = PetStoreApi::new("http://localhost");
        prop_assert_eq!(pet_code(api.parse_add_pet(response(code, "{}"))), Some(code));
    }

    #[test]
    fn find_pets_undocumented(code in outside(&[200, 400])) {
        let api = PetStoreApi::new("http://localhost");
        prop_assert_eq!(pet_code(api.parse_find_pets(response(code, "[]"))), Some(code));
    }

    #[test]
    fn login_user_undocumented(code in outside(&[200, 400])) {
        let api = PetStoreApi::new("http://localhost");
        prop_assert_eq!(pet_code(api.parse_login_user(response(code, "\"token\""))), Some(code));
    }

    #[test]
    fn get_players_undocumented(code in outside(&[200]), body in ".*") {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_get_players(response(code, &body))), Some(code));
    }

    #[test]
    fn get_player_undocumented(code in outside(&[200, 404])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_get_player(response(code, "{}"))), Some(code));
    }

    #[test]
    fn update_player_undocumented(code in outside(&[200, 400, 404])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_update_player(response(code, "{}"))), Some(code));
    }

    #[test]
    fn create_team_undocumented(code in outside(&[201, 400])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_create_team(response(code, "{}"))), Some(code));
    }

    #[test]
    fn get_teams_undocumented(code in outside(&[200])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_get_teams(response(code, "[]"))), Some(code));
    }

    #[test]
    fn get_team_undocumented(code in outside(&[200, 404])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_get_team(response(code, "{}"))), Some(code));
    }

    #[test]
    fn create_match_undocumented(code in outside(&[201, 400])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(soccer_code(api.parse_create_match(response(code, "{}"))), Some(code));
    }

    #[test]
    fn update_match_result_undocumented(code in outside(&[200, 400, 404])) {
        let api = SoccerTeamApi::new("http://localhost");
        prop_assert_eq!(
            soccer_code(api.parse_update_match_result(response(code, "{}"))),
            Some(code)
        );
    }
}
