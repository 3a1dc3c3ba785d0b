//! Sample VLS programs, one per language concept.

pub const CONCEPTS: [&str; 4] = ["variables", "operations", "precedence", "control"];

pub fn sample_program(concept: &str) -> Option<&'static str> {
    match concept {
        "variables" => Some(
            "var x;
var y;
x = 5;
y = 3;
print(x add y);
",
        ),
        "operations" => Some(
            "var result;
result = 5 add 3 mul 2;
print(result);
var greeting;
greeting = \"hello \" concat \"world\";
print(greeting);
",
        ),
        "precedence" => Some(
            "var a;
var b;
a = (5 add 3) mul 2;
b = a pow 2;
print(b);
",
        ),
        "control" => Some(
            "var i;
i = 0;
while (i less 3) do
    if (i equal 1) then
        print(\"one\");
    end_if
    i = i add 1;
end_while
",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_concept_has_a_sample() {
        for concept in CONCEPTS {
            assert!(sample_program(concept).is_some(), "{}", concept);
        }
        assert!(sample_program("functions").is_none());
    }

    #[test]
    fn test_samples_compile() {
        for concept in CONCEPTS {
            let source = sample_program(concept).unwrap();
            assert!(crate::compile(source).is_ok(), "{}", concept);
        }
    }
}
