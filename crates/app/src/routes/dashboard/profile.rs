use dioxus::prelude::*;
use shared_types::{demo, Identity};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle};

/// Consultant's own profile. Professional details come from the consultant
/// record linked to the identity, when there is one.
#[component]
pub fn ProfilePanel(identity: Identity) -> Element {
    let record = demo::consultant_for_user(&identity.id);

    rsx! {
        div { class: "panel",
            PageHeader {
                PageTitle { "My Profile" }
            }

            div { class: "two-column",
                Card {
                    CardHeader {
                        CardTitle { "Personal Information" }
                    }
                    CardContent {
                        dl { class: "field-list",
                            div {
                                dt { "Name" }
                                dd { "{identity.name}" }
                            }
                            div {
                                dt { "Email" }
                                dd { "{identity.email}" }
                            }
                            div {
                                dt { "Role" }
                                dd { "{identity.role.display_name()}" }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Professional Details" }
                    }
                    CardContent {
                        if let Some(consultant) = record {
                            dl { class: "field-list",
                                div {
                                    dt { "Skills" }
                                    dd { class: "tag-list",
                                        for skill in consultant.skills.iter() {
                                            Badge { key: "{skill}", variant: BadgeVariant::Outline, "{skill}" }
                                        }
                                    }
                                }
                                div {
                                    dt { "Hourly Rate" }
                                    dd { "${consultant.hourly_rate}/hour" }
                                }
                                div {
                                    dt { "Availability" }
                                    dd {
                                        Badge {
                                            variant: if consultant.availability { BadgeVariant::Success } else { BadgeVariant::Secondary },
                                            "{consultant.availability_label()}"
                                        }
                                    }
                                }
                            }
                        } else {
                            p { class: "panel-subtitle", "No consultant record is linked to this account." }
                        }
                    }
                }
            }
        }
    }
}
