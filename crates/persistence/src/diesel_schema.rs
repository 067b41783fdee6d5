// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    shifts (id) {
        id -> BigInt,
        title -> Text,
        start_time -> Text,
        end_time -> Text,
        employee_id -> BigInt,
        employee_name -> Text,
        employee_role -> Text,
    }
}

diesel::table! {
    shift_assignments (id) {
        id -> BigInt,
        employee_id -> BigInt,
        shift_id -> BigInt,
        status -> Text,
    }
}

diesel::table! {
    shift_proposals (id) {
        id -> BigInt,
        employee_id -> BigInt,
        employee_name -> Text,
        employee_role -> Text,
        proposed_title -> Text,
        proposed_start_time -> Text,
        proposed_end_time -> Text,
        status -> Text,
        manager_alternative_title -> Nullable<Text>,
        manager_alternative_start_time -> Nullable<Text>,
        manager_alternative_end_time -> Nullable<Text>,
        manager_comment -> Nullable<Text>,
    }
}

diesel::table! {
    swap_proposals (id) {
        id -> BigInt,
        employee_id -> BigInt,
        employee_name -> Text,
        employee_role -> Text,
        current_shift_id -> BigInt,
        proposed_title -> Text,
        proposed_start_time -> Text,
        proposed_end_time -> Text,
        status -> Text,
        manager_comment -> Nullable<Text>,
    }
}

diesel::table! {
    id_counters (counter) {
        counter -> Text,
        next_id -> BigInt,
    }
}
