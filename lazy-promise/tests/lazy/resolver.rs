use lazy_promise::{LazyPromise, Resolver};

#[test]
fn non_callable_resolvers_report_their_type() {
    let cases: [(Resolver<u32, String>, &str); 6] = [
        (Resolver::String("a".to_string()), "string"),
        (Resolver::Number(5.0), "number"),
        (Resolver::Boolean(true), "boolean"),
        (Resolver::Undefined, "undefined"),
        (Resolver::Null, "object"),
        (Resolver::Object(Box::new(vec![1u8, 2, 3])), "object"),
    ];

    for (resolver, ty) in cases {
        match LazyPromise::try_new(resolver) {
            Err(err) => {
                assert_eq!(err.to_string(), format!("Promise resolver {ty} is not a function"));
                assert_eq!(err.dynamic_type(), ty);
            }
            Ok(_) => panic!("constructed a promise from a non-callable {ty}"),
        }
    }
}

#[tokio::test]
async fn callable_resolver_constructs_a_working_promise() {
    crate::init();
    let promise: LazyPromise<u32, String> =
        LazyPromise::try_new(Resolver::function(|resolve, _| resolve.resolve(21))).unwrap();

    assert_eq!(promise.map(|value| Ok(value * 2)).await, Ok(42));
}
