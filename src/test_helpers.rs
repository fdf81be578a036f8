use serde_json::{Value, json};

/// Place `presentation` at the fixed path inside a page payload.
pub fn wrap_presentation(presentation: Value) -> Value {
    json!([{
        "root > core-guest-spa": [
            "ROOT_QUERY",
            [
                "StaysPdpSections",
                {
                    "niobeMinimalClientData": [
                        "StaysPdpSections:{}",
                        [
                            "StaysPdpSections",
                            {"data": {"presentation": presentation}}
                        ]
                    ]
                }
            ]
        ]
    }])
}

/// Presentation object holding the given section wrappers.
pub fn presentation_with(sections: Vec<Value>) -> Value {
    json!({
        "__typename": "RootPresentationContainer",
        "stayProductDetailPage": {
            "sections": {"sections": sections, "metadata": {}}
        }
    })
}

/// Payload with one section of each kind; text fields carry line breaks.
pub fn sample_document() -> Value {
    wrap_presentation(presentation_with(vec![
        json!({
            "sectionId": "TITLE_DEFAULT",
            "section": {"__typename": "PdpTitleSection", "title": "Lakeside cabin"}
        }),
        json!({
            "sectionId": "POLICIES_DEFAULT",
            "section": {
                "__typename": "PoliciesSection",
                "houseRulesSections": [{
                    "title": "House rules",
                    "items": [
                        {"title": "No smoking", "subtitle": null},
                        {"title": "Additional rules", "html": {"htmlText": "Quiet hours\nafter 10pm"}}
                    ]
                }]
            }
        }),
        json!({
            "sectionId": "AMENITIES_DEFAULT",
            "section": {
                "__typename": "AmenitiesSection",
                "seeAllAmenitiesGroups": [
                    {"title": "Bathroom", "amenities": [{"title": "Hair dryer"}, {"title": "Hot water"}]}
                ]
            }
        }),
        json!({
            "sectionId": "DESCRIPTION_MODAL",
            "section": {
                "__typename": "PdpDescriptionModalSection",
                "items": [
                    {"title": "Summary", "html": {"htmlText": "A nice place"}},
                    {"html": {"htmlText": "Close to downtown\r\nand the lake"}}
                ]
            }
        }),
    ]))
}
