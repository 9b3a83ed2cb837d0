use super::*;

fn package(id: &str, title: &str, price: f64) -> Package {
    Package {
        id: id.to_owned(),
        title: title.to_owned(),
        description: String::new(),
        price,
        image_url: None,
        course_ids: Vec::new(),
        discount: 0.0,
        duration: None,
        status: None,
    }
}

#[test]
fn payment_href_carries_package_details() {
    assert_eq!(
        payment_href(&package("p-1", "Starter", 50.0)),
        "/payment?packageId=p-1&packageName=Starter&amount=50"
    );
}

#[test]
fn payment_href_encodes_names() {
    assert_eq!(
        payment_href(&package("p 2", "Math & Physics", 49.5)),
        "/payment?packageId=p%202&packageName=Math%20%26%20Physics&amount=49.5"
    );
}
