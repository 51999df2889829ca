/// Display-only fixture row for the contacts table; FINITY owns no contact
/// data of its own
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub city: &'static str,
}

/// Fixture rows shown on the contacts page
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: 1,
            name: "Jon Snow",
            email: "jonsnow@gmail.com",
            phone: "(665) 121-5454",
            city: "New York",
        },
        Contact {
            id: 2,
            name: "Cersei Lannister",
            email: "cerseilannister@gmail.com",
            phone: "(421) 314-2288",
            city: "Chicago",
        },
        Contact {
            id: 3,
            name: "Jaime Lannister",
            email: "jaimelannister@gmail.com",
            phone: "(422) 982-6739",
            city: "Austin",
        },
        Contact {
            id: 4,
            name: "Anya Stark",
            email: "anyastark@gmail.com",
            phone: "(921) 425-6742",
            city: "Seattle",
        },
        Contact {
            id: 5,
            name: "Daenerys Targaryen",
            email: "daenerystargaryen@gmail.com",
            phone: "(421) 445-1189",
            city: "Boston",
        },
        Contact {
            id: 6,
            name: "Ever Melisandre",
            email: "evermelisandre@gmail.com",
            phone: "(232) 545-6483",
            city: "Denver",
        },
        Contact {
            id: 7,
            name: "Ferrara Clifford",
            email: "ferraraclifford@gmail.com",
            phone: "(543) 124-0123",
            city: "Portland",
        },
        Contact {
            id: 8,
            name: "Rossini Frances",
            email: "rossinifrances@gmail.com",
            phone: "(222) 444-5555",
            city: "Miami",
        },
    ]
}
