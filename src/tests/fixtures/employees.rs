use crate::modules::pay_runs::core::employee::Employee;

pub fn asha() -> Employee {
    Employee {
        id: "E1".into(),
        name: "Asha Rao".into(),
    }
}

pub fn bilal() -> Employee {
    Employee {
        id: "E2".into(),
        name: "Bilal Khan".into(),
    }
}

pub fn make_employees() -> Vec<Employee> {
    vec![
        asha(),
        bilal(),
        Employee {
            id: "E3".into(),
            name: "Chen Wei".into(),
        },
    ]
}
